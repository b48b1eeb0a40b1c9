use async_trait::async_trait;
use mockall::mock;
use schedule_core::errors::ScheduleResult;

use crate::fetcher::PageFetcher;

// Mock fetcher for handler tests
mock! {
    pub PageFetcher {}

    #[async_trait]
    impl PageFetcher for PageFetcher {
        async fn fetch_page(&self) -> ScheduleResult<String>;
    }
}
