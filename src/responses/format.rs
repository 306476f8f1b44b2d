// responses/format.rs
use mime::Mime;
use std::cmp::Ordering;

/// Representation a handler answers with, negotiated once per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Html,
    Json,
}

impl Format {
    /// Offered in preference order; HTML wins ties and an absent `Accept`.
    const OFFERS: [Format; 2] = [Format::Html, Format::Json];

    pub fn mime(self) -> Mime {
        match self {
            Format::Html => mime::TEXT_HTML,
            Format::Json => mime::APPLICATION_JSON,
        }
    }

    /// Pick a format from an `Accept` header value.
    ///
    /// Returns `None` when neither offer is acceptable.
    pub fn negotiate(accept: Option<&str>) -> Option<Format> {
        let accept = match accept.map(str::trim) {
            None | Some("") => return Some(Format::Html),
            Some(a) => a,
        };

        let ranges: Vec<Mime> = accept
            .split(',')
            .filter_map(|entry| entry.trim().trim_end_matches(';').parse().ok())
            .collect();

        Self::OFFERS
            .iter()
            .enumerate()
            .filter_map(|(offer_idx, offer)| {
                best_match(&offer.mime(), &ranges).map(|m| (*offer, offer_idx, m))
            })
            .filter(|(_, _, m)| m.quality > 0.0)
            .min_by(|(_, a_idx, a), (_, b_idx, b)| {
                b.quality
                    .partial_cmp(&a.quality)
                    .unwrap_or(Ordering::Equal)
                    .then(b.specificity.cmp(&a.specificity))
                    .then(a.position.cmp(&b.position))
                    .then(a_idx.cmp(b_idx))
            })
            .map(|(offer, _, _)| offer)
    }
}

#[derive(Debug, Clone, Copy)]
struct RangeMatch {
    quality: f32,
    specificity: u8,
    position: usize,
}

/// The most specific range in `ranges` covering `offer`.
fn best_match(offer: &Mime, ranges: &[Mime]) -> Option<RangeMatch> {
    ranges
        .iter()
        .enumerate()
        .filter_map(|(position, range)| {
            let specificity = if range.type_() == mime::STAR && range.subtype() == mime::STAR {
                0
            } else if range.type_() != offer.type_() {
                return None;
            } else if range.subtype() == mime::STAR {
                1
            } else if range.subtype() == offer.subtype() {
                2
            } else {
                return None;
            };

            let quality = range
                .get_param("q")
                .and_then(|q| q.as_str().parse::<f32>().ok())
                .unwrap_or(1.0);

            Some(RangeMatch {
                quality,
                specificity,
                position,
            })
        })
        .max_by(|a, b| a.specificity.cmp(&b.specificity).then(b.position.cmp(&a.position)))
}
