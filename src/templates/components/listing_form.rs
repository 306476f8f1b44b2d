use crate::domain::ListingFields;
use maud::{html, Markup};

/// Title/description/isactive inputs shared by the create and edit pages.
///
/// `method_override` adds the hidden `_method` field, since forms can only POST.
pub fn listing_form(
    action: &str,
    method_override: Option<&str>,
    values: &ListingFields,
    submit_label: &str,
) -> Markup {
    html! {
        form method="post" action=(action) class="listing-form" {
            @if let Some(method) = method_override {
                input type="hidden" name="_method" value=(method);
            }

            label for="title" { "Title" }
            input type="text" id="title" name="title" value=[values.title.as_deref()];

            label for="description" { "Description" }
            textarea id="description" name="description" {
                (values.description.as_deref().unwrap_or(""))
            }

            label for="isactive" { "Active" }
            select id="isactive" name="isactive" {
                option value="" selected[values.isactive.is_none()] { "Not set" }
                option value="true" selected[values.isactive == Some(true)] { "Yes" }
                option value="false" selected[values.isactive == Some(false)] { "No" }
            }

            button type="submit" class="primary" { (submit_label) }
        }
    }
}
