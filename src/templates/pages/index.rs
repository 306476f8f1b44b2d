// templates/pages/index.rs — listings/index
use crate::domain::Listing;
use crate::templates::{active_badge, desktop_layout};
use maud::{html, Markup};

pub fn index_page(title: &str, base: &str, listings: &[Listing]) -> Markup {
    desktop_layout(
        title,
        base,
        html! {
            h1 { (title) }

            @if listings.is_empty() {
                p class="empty" { "No listings yet." }
            } @else {
                table class="listings" {
                    thead {
                        tr {
                            th { "Title" }
                            th { "Description" }
                            th { "Status" }
                            th {}
                        }
                    }
                    tbody {
                        @for listing in listings {
                            tr {
                                td {
                                    a href=(format!("{base}/{}", listing.internal_id)) {
                                        (listing.title.as_deref().unwrap_or("(untitled)"))
                                    }
                                }
                                td { (listing.description.as_deref().unwrap_or("")) }
                                td { (active_badge(listing.isactive)) }
                                td { a href=(format!("{base}/{}/edit", listing.internal_id)) { "Edit" } }
                            }
                        }
                    }
                }
            }

            p { a href=(format!("{base}/create")) { "Create New Listing" } }
        },
    )
}
