//! Summary section. Holds the only derived value in the whole page: the
//! count of whole years elapsed since the career start date, recomputed on
//! every render from the current date.

use chrono::{Datelike, NaiveDate, Utc};
use maud::{html, Markup};

use crate::sections::section;

const CAREER_START_YEAR: i32 = 2008;

/// Renders the summary against today's date.
pub fn summary() -> Markup {
    summary_on(Utc::now().date_naive())
}

/// Renders the summary as of an arbitrary date. Split out so the
/// year-counting behavior is testable without touching the clock.
pub fn summary_on(today: NaiveDate) -> Markup {
    let years = years_since(today, career_start());
    html! {
        div class="row mt-5" {
            (section("Summary"))
            div class="col-12 text-justify" {
                p {
                    "Technology leader with " (years) "+ years of experience driving engineering excellence, building high-performing teams, and delivering scalable software solutions. Customer and business driven, people-centric manager of multicultural, cross-functional, co-located and remote agile development teams for start/scale-ups and enterprises."
                }
                p {
                    "Currently leading the engineering department — collaborating with Product, Support, HR — where I improved product quality by ~70%, reduced security issues by ~60%, ensured 100% of critical customers’ support requests were handled within 2 hours, while achieving an all-time-high eNPS of 9.23 out of 10"
                }
                p {
                    "I like to contribute to the creation and organization of high performing teams based on collaboration, communication and healthy application of Agile principles. I like to be part of and collaborate in creating a work environment where all people can feel safe, listened, belonging, freely contribute and strive for everyone's success while also improving their lives and grow as individuals and professionals."
                }
            }
        }
    }
}

/// Whole calendar years between `start` and `today`: the year difference,
/// minus one when today's month/day has not reached the anniversary yet.
pub fn years_since(today: NaiveDate, start: NaiveDate) -> i32 {
    let mut years = today.year() - start.year();
    if (today.month(), today.day()) < (start.month(), start.day()) {
        years -= 1;
    }
    years
}

fn career_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(CAREER_START_YEAR, 1, 1).expect("valid calendar date")
}
