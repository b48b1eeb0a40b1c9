//! A hand-written week matching the layout of the published page.
//!
//! Used by tests and demos in place of a live fetch.

use super::schedule::{DayBlock, ScheduleEntry, ScheduleResponse, Weekday};

fn entry(name: &str, time: &str, teacher: &str, room: &str) -> ScheduleEntry {
    ScheduleEntry {
        name: name.to_string(),
        time: time.to_string(),
        teacher: teacher.to_string(),
        room: room.to_string(),
        group: "1 ТС-1".to_string(),
    }
}

fn block(day: Weekday, date: &str, lectures: Vec<ScheduleEntry>) -> DayBlock {
    DayBlock {
        day,
        date: date.to_string(),
        lectures,
    }
}

pub fn sample_response() -> ScheduleResponse {
    let schedule = vec![
        block(
            Weekday::Monday,
            "10.11",
            vec![
                entry("Классный час", "8:00", "Вачаева Е.В.", "1к. 111"),
                entry("Математика", "9:30", "Иванов И.И.", "1к. 201"),
            ],
        ),
        block(
            Weekday::Tuesday,
            "11.11",
            vec![entry("Физика", "8:00", "Петрова А.С.", "1к. 302")],
        ),
        block(
            Weekday::Wednesday,
            "12.11",
            vec![entry("Информатика", "9:30", "Сидоров П.К.", "2к. 105")],
        ),
        block(
            Weekday::Thursday,
            "13.11",
            vec![entry("Английский язык", "11:00", "Смирнова О.В.", "1к. 108")],
        ),
        block(
            Weekday::Friday,
            "14.11",
            vec![entry("Химия", "8:00", "Козлов В.А.", "3к. 201")],
        ),
    ];

    ScheduleResponse::new(schedule, "с 10.11.2025 по 16.11.2025")
}
