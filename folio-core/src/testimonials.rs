//! Testimonial section shaping.

use folio_model::TestimonialRecord;
use serde::Serialize;

use crate::carousel::{CarouselItem, item_tilt};

/// Portrait shown when a testimonial has no avatar.
pub const FALLBACK_AVATAR_URL: &str = "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?q=80&w=500&auto=format&fit=crop";
pub const ANONYMOUS_NAME: &str = "Anonymous";

/// A testimonial ready for the carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    /// Stable identity: the document id, or a composite when there is none.
    pub key: String,
    pub quote: String,
    pub name: String,
    /// "Position at Company", or just the position.
    pub designation: String,
    pub src: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_logo: Option<String>,
    /// Resting tilt of the slide in degrees.
    pub tilt: i32,
}

impl CarouselItem for Testimonial {
    fn key(&self) -> &str {
        &self.key
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Display designation for a testimonial author.
pub fn designation(position: Option<&str>, company: Option<&str>) -> String {
    match non_empty(company) {
        Some(company) => {
            format!("{} at {company}", position.unwrap_or_default())
        }
        None => position.unwrap_or_default().to_string(),
    }
}

/// Shape `records` for the carousel, preserving their order.
pub fn normalize_testimonials(records: &[TestimonialRecord]) -> Vec<Testimonial> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let name = non_empty(record.name.as_deref())
                .unwrap_or(ANONYMOUS_NAME)
                .to_string();
            let designation = designation(
                record.position.as_deref(),
                record.company.as_deref(),
            );
            let src = non_empty(record.avatar_url.as_deref())
                .unwrap_or(FALLBACK_AVATAR_URL)
                .to_string();
            let key = match non_empty(record.id.as_deref()) {
                Some(id) => id.to_string(),
                None => format!("{name}-{designation}-{src}-{index}"),
            };
            Testimonial {
                tilt: item_tilt(&key, index),
                key,
                quote: record.testimonial.clone().unwrap_or_default(),
                name,
                designation,
                src,
                company_logo: record.company_logo_url.clone(),
            }
        })
        .collect()
}

/// Featured testimonials in display order. Ties keep their input order.
pub fn featured_in_order(records: &[TestimonialRecord]) -> Vec<TestimonialRecord> {
    let mut featured: Vec<_> = records
        .iter()
        .filter(|r| r.is_featured())
        .cloned()
        .collect();
    featured.sort_by_key(|r| r.order.unwrap_or(0));
    featured
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> TestimonialRecord {
        TestimonialRecord {
            name: Some(name.into()),
            position: Some("CTO".into()),
            company: Some("Acme".into()),
            testimonial: Some("Shipped on time.".into()),
            avatar_url: Some("https://img/a.png".into()),
            featured: Some(true),
            ..Default::default()
        }
    }

    #[test]
    fn designation_combines_position_and_company() {
        assert_eq!(designation(Some("CTO"), Some("Acme")), "CTO at Acme");
        assert_eq!(designation(Some("CTO"), None), "CTO");
        assert_eq!(designation(None, None), "");
        assert_eq!(designation(Some("Founder"), Some("")), "Founder");
    }

    #[test]
    fn missing_fields_use_fallbacks() {
        let shaped = normalize_testimonials(&[TestimonialRecord::default()]);
        let t = &shaped[0];

        assert_eq!(t.name, ANONYMOUS_NAME);
        assert_eq!(t.quote, "");
        assert_eq!(t.designation, "");
        assert_eq!(t.src, FALLBACK_AVATAR_URL);
        assert_eq!(t.key, format!("Anonymous--{FALLBACK_AVATAR_URL}-0"));
    }

    #[test]
    fn composite_key_includes_position() {
        let shaped = normalize_testimonials(&[record("Ada"), record("Ada")]);

        assert_eq!(shaped[0].key, "Ada-CTO at Acme-https://img/a.png-0");
        assert_eq!(shaped[1].key, "Ada-CTO at Acme-https://img/a.png-1");
        assert_ne!(shaped[0].key, shaped[1].key);
    }

    #[test]
    fn document_id_wins_over_composite_key() {
        let mut with_id = record("Ada");
        with_id.id = Some("t1".into());
        let shaped = normalize_testimonials(&[with_id]);

        assert_eq!(shaped[0].key, "t1");
        assert_eq!(shaped[0].tilt, 8);
    }

    #[test]
    fn tilt_is_stable_across_calls() {
        let records = vec![record("Ada"), record("Grace")];
        assert_eq!(
            normalize_testimonials(&records),
            normalize_testimonials(&records)
        );
    }

    #[test]
    fn featured_are_filtered_and_sorted() {
        let mut first = record("First");
        first.order = Some(1);
        let mut zeroth = record("Zeroth");
        zeroth.order = Some(0);
        let mut hidden = record("Hidden");
        hidden.featured = Some(false);

        let picked = featured_in_order(&[first, hidden, zeroth]);
        let names: Vec<_> =
            picked.iter().map(|r| r.name.as_deref().unwrap()).collect();
        assert_eq!(names, ["Zeroth", "First"]);
    }
}
