// SPDX-FileCopyrightText: The decknav authors
// SPDX-License-Identifier: MPL-2.0

use super::*;

fn slide(ordinal: u32) -> SlideId {
    SlideId::new(ordinal).unwrap()
}

#[test]
fn encode_decode() {
    let path = SlidePath::new(slide(7));
    assert_eq!("/slide/7", path.encode());
    assert_eq!(path, SlidePath::decode_str("/slide/7").unwrap());
}

#[test]
fn root_path_addresses_the_first_slide() {
    let path = SlidePath::decode_str(ROOT_PATH).unwrap();
    assert!(path.is_first());
    assert_eq!(slide(1), path.slide());
}

#[test]
fn decode_accepts_leading_zeros() {
    assert_eq!(slide(7), SlidePath::decode_str("/slide/007").unwrap().slide());
}

#[test]
fn should_fail_to_decode_ordinal_zero() {
    assert!(SlidePath::decode_str("/slide/0").is_err());
    assert!(SlidePath::decode_str("/slide/000").is_err());
}

#[test]
fn should_fail_to_decode_overflowing_ordinals() {
    assert!(SlidePath::decode_str("/slide/4294967296").is_err());
}

#[test]
fn should_fail_to_decode_non_slide_paths() {
    assert!(SlidePath::decode_str("").is_err());
    assert!(SlidePath::decode_str("/slides/2").is_err());
    assert!(SlidePath::decode_str("/slide/").is_err());
    assert!(SlidePath::decode_str("/slide/two").is_err());
    assert!(SlidePath::decode_str("/slide/2/notes").is_err());
    assert!(SlidePath::decode_str("slide/2").is_err());
}

#[test]
fn parse_from_str_allows_leading_or_trailing_whitespace() {
    assert_eq!(slide(3), " /slide/3".parse::<SlidePath>().unwrap().slide());
    assert_eq!(slide(3), "/slide/3 ".parse::<SlidePath>().unwrap().slide());
    assert!(SlidePath::decode_str(" /slide/3").is_err());
}

#[test]
fn href_resolution_accepts_absolute_and_relative_targets() {
    assert_eq!(
        slide(4),
        SlidePath::from_href("https://example.com/slide/4").unwrap().slide()
    );
    assert_eq!(slide(4), SlidePath::from_href("/slide/4").unwrap().slide());
    assert_eq!(slide(4), SlidePath::from_href("slide/4").unwrap().slide());
    assert_eq!(slide(4), SlidePath::from_href("./slide/4").unwrap().slide());
    assert!(SlidePath::from_href("/").unwrap().is_first());
}

#[test]
fn href_resolution_ignores_query_and_fragment() {
    assert_eq!(
        slide(4),
        SlidePath::from_href("/slide/4?autoplay=1#top").unwrap().slide()
    );
}

#[test]
fn href_resolution_decodes_percent_encoded_paths() {
    assert_eq!(slide(7), SlidePath::from_href("/slide/%37").unwrap().slide());
}

#[test]
fn should_fail_to_resolve_non_slide_hrefs() {
    assert!(SlidePath::from_href("/about").is_err());
    assert!(SlidePath::from_href("https://example.com/other/1").is_err());
    assert!(SlidePath::from_href("mailto:someone@example.com").is_err());
}
