use std::collections::HashSet;
use std::rc::Rc;

use serde::Deserialize;
use thiserror::Error;

const TESTIMONIALS_JSON: &str = include_str!("../assets/testimonials.json");

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Testimonial {
    pub id: u32,
    pub name: String,
    #[serde(rename = "image")]
    pub image_url: String,
    pub rating: u8,
    pub text: String,
}

#[derive(Debug, Error)]
pub enum TestimonialError {
    #[error("failed to parse testimonials: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("testimonial list is empty")]
    Empty,
    #[error("duplicate testimonial id {0}")]
    DuplicateId(u32),
    #[error("testimonial {id} has rating {rating}, expected 1-5")]
    RatingOutOfRange { id: u32, rating: u8 },
}

/// Loads the testimonial list bundled into the binary.
pub fn load() -> Result<Rc<[Testimonial]>, TestimonialError> {
    parse(TESTIMONIALS_JSON)
}

pub fn parse(json: &str) -> Result<Rc<[Testimonial]>, TestimonialError> {
    let list: Vec<Testimonial> = serde_json::from_str(json)?;
    validate(&list)?;
    Ok(list.into())
}

fn validate(list: &[Testimonial]) -> Result<(), TestimonialError> {
    if list.is_empty() {
        return Err(TestimonialError::Empty);
    }

    let mut seen = HashSet::with_capacity(list.len());
    for item in list {
        if !seen.insert(item.id) {
            return Err(TestimonialError::DuplicateId(item.id));
        }
        if !(1..=5).contains(&item.rating) {
            return Err(TestimonialError::RatingOutOfRange {
                id: item.id,
                rating: item.rating,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u32, rating: u8) -> String {
        format!(
            r#"{{"id": {id}, "name": "Student", "image": "/assets/avatar.png", "rating": {rating}, "text": "Great help"}}"#
        )
    }

    #[test]
    fn bundled_list_loads_in_order() {
        let list = load().expect("bundled testimonials are valid");
        let ids: Vec<u32> = list.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(list[0].name, "Student A");
        assert!(list[2].image_url.starts_with("https://"));
    }

    #[test]
    fn empty_list_is_rejected() {
        assert!(matches!(parse("[]"), Err(TestimonialError::Empty)));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let json = format!("[{}, {}]", entry(7, 5), entry(7, 4));
        assert!(matches!(parse(&json), Err(TestimonialError::DuplicateId(7))));
    }

    #[test]
    fn rating_must_be_one_to_five() {
        let zero = format!("[{}]", entry(1, 0));
        let six = format!("[{}]", entry(1, 6));
        assert!(matches!(
            parse(&zero),
            Err(TestimonialError::RatingOutOfRange { id: 1, rating: 0 })
        ));
        assert!(matches!(
            parse(&six),
            Err(TestimonialError::RatingOutOfRange { id: 1, rating: 6 })
        ));
    }

    #[test]
    fn malformed_json_surfaces_parse_error() {
        let err = parse("{ not json").unwrap_err();
        assert!(matches!(err, TestimonialError::Parse(_)));
        assert!(err.to_string().starts_with("failed to parse testimonials"));
    }
}
