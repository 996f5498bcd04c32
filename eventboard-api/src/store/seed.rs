/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Sample meetings loaded into the in-memory meetings store at startup.

use chrono::{TimeZone, Utc};
use eventboard_types::{Meeting, MeetingFields, SubMeeting};

fn sub_meeting(
    full_name: &str,
    name: &str,
    day: u32,
    start: (u32, u32),
    end: (u32, u32),
) -> SubMeeting {
    SubMeeting {
        full_name: Some(full_name.to_string()),
        name: Some(name.to_string()),
        start_time: Utc.with_ymd_and_hms(2024, 3, day, start.0, start.1, 0).single(),
        end_time: Utc.with_ymd_and_hms(2024, 3, day, end.0, end.1, 0).single(),
    }
}

/// The two fixed records, ids `"1"` and `"2"`.
pub fn sample_meetings() -> Vec<Meeting> {
    vec![
        Meeting::new(
            "1",
            MeetingFields {
                name: "General Assembly".to_string(),
                meetings: vec![
                    sub_meeting("Opening Session", "Opening", 4, (9, 0), (10, 30)),
                    sub_meeting("Budget Discussion", "Budget", 4, (11, 0), (12, 30)),
                ],
            },
        ),
        Meeting::new(
            "2",
            MeetingFields {
                name: "Board Meeting".to_string(),
                meetings: vec![sub_meeting(
                    "Quarterly Board Review",
                    "Review",
                    12,
                    (14, 0),
                    (16, 0),
                )],
            },
        ),
    ]
}
