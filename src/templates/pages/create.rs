use crate::domain::ListingFields;
use crate::templates::{desktop_layout, listing_form};
use maud::{html, Markup};

pub fn create_page(title: &str, base: &str) -> Markup {
    let action = if base.is_empty() { "/" } else { base };

    desktop_layout(
        title,
        base,
        html! {
            h1 { (title) }
            (listing_form(action, None, &ListingFields::default(), "Create"))
        },
    )
}
