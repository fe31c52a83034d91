//! Professional experience: companies, roles, achievement bullets.

use maud::{html, Markup};

use crate::models::{Company, Role};
use crate::sections::section;

/// "Professional experience" header followed by every company in
/// display order.
pub fn companies(companies: &[Company]) -> Markup {
    html! {
        div class="row mt-5" {
            (section("Professional experience"))
            @for company in companies {
                (self::company(company))
            }
        }
    }
}

/// Company name heading followed by its roles in order.
pub fn company(company: &Company) -> Markup {
    html! {
        h3 class="mt-2" { (company.name) }
        @for role in &company.roles {
            (self::role(role))
        }
    }
}

/// Two-column role header (title left, date range right) and the
/// achievement bullets in input order. An empty description renders an
/// empty list.
pub fn role(role: &Role) -> Markup {
    html! {
        div class="col-6" {
            h4 { (role.name) }
        }
        div class="col-6 text-end" {
            h4 { (role.from) " - " (role.to) }
        }
        div class="col-12" {
            ul {
                @for line in &role.description {
                    li { (line) }
                }
            }
        }
    }
}
