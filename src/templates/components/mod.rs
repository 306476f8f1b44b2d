use maud::{html, Markup};

pub mod error;
pub mod listing_form;

pub use error::error_page;
pub use listing_form::listing_form;

pub fn active_badge(isactive: Option<bool>) -> Markup {
    html! {
        @match isactive {
            Some(true) => { span class="badge active" { "Active" } }
            Some(false) => { span class="badge inactive" { "Inactive" } }
            None => { span class="badge" { "—" } }
        }
    }
}
