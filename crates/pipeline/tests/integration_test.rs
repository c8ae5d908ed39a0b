//! Integration tests for the pipeline.
//!
//! These tests run whole queries over a parsed table: filters, ranking and
//! projection working together.

use data_loader::{MovieRecord, MovieTable, parser::parse_movies};
use pipeline::{
    FilterCriteria, QueryError, SearchSession, SortKey, filter_movies, sort_movies, top_n,
};
use std::sync::Arc;

const MOVIES_CSV: &str = "\
Name,Year,Duration,Genre,Rating,Votes,Director,Actor 1,Actor 2,Actor 3
Lagaan: Once Upon a Time in India,(2001),224 min,\"Drama, Musical, Sport\",8.1,\"108,470\",Ashutosh Gowariker,Aamir Khan,Gracy Singh,Rachel Shelley
Gully Boy,(2019),153 min,\"Drama, Music\",8.0,\"33,286\",Zoya Akhtar,Ranveer Singh,Alia Bhatt,Siddhant Chaturvedi
Hera Pheri,(2000),156 min,\"Action, Comedy, Crime\",8.1,\"69,312\",Priyadarshan,Akshay Kumar,Sunil Shetty,Paresh Rawal
Zindagi Na Milegi Dobara,(2011),155 min,\"Comedy, Drama\",8.2,\"77,487\",Zoya Akhtar,Hrithik Roshan,Abhay Deol,Farhan Akhtar
Ankahee,(2006),,Romance,,,Vikram Bhatt,Aftab Shivdasani,Ameesha Patel,Esha Deol
Dil Chahta Hai,(2001),183 min,\"Comedy, Drama, Romance\",8.1,\"74,209\",Farhan Akhtar,Aamir Khan,Saif Ali Khan,Akshaye Khanna
Untitled,,,Drama,5.1,8,Unknown,,,
";

fn load() -> MovieTable {
    parse_movies(MOVIES_CSV, "movies.csv").unwrap()
}

fn names(movies: &[&MovieRecord]) -> Vec<String> {
    movies.iter().map(|movie| movie.name.clone()).collect()
}

#[test]
fn test_rating_and_genre_query() {
    let table = load();
    let criteria = FilterCriteria::new().rating(">8").genre("comedy");

    let result = filter_movies(table.records(), &criteria).unwrap();

    assert_eq!(
        names(&result),
        vec!["Hera Pheri", "Zindagi Na Milegi Dobara", "Dil Chahta Hai"]
    );
}

#[test]
fn test_year_search_with_director() {
    let table = load();

    let result = filter_movies(table.records(), &FilterCriteria::new().search("2001")).unwrap();
    assert_eq!(
        names(&result),
        vec!["Lagaan: Once Upon a Time in India", "Dil Chahta Hai"]
    );

    let criteria = FilterCriteria::new().search("2001").director("farhan");
    let result = filter_movies(table.records(), &criteria).unwrap();
    assert_eq!(names(&result), vec!["Dil Chahta Hai"]);
}

#[test]
fn test_unrated_movies_count_as_zero() {
    let table = load();

    let result = filter_movies(table.records(), &FilterCriteria::new().rating("<1")).unwrap();
    assert_eq!(names(&result), vec!["Ankahee"]);
}

#[test]
fn test_invalid_rating_filter_is_not_an_empty_match() {
    let table = load();
    let criteria = FilterCriteria::new().search("gully").rating("garbage");

    let err = filter_movies(table.records(), &criteria).unwrap_err();
    assert!(matches!(err, QueryError::InvalidRatingFilter { .. }));
    assert!(err.to_string().contains("garbage"));
}

#[test]
fn test_narrowing_criteria_never_grows_result() {
    let table = load();
    let steps = [
        FilterCriteria::new(),
        FilterCriteria::new().genre("drama"),
        FilterCriteria::new().genre("drama").rating(">8"),
        FilterCriteria::new().genre("drama").rating(">8").director("akhtar"),
        FilterCriteria::new()
            .genre("drama")
            .rating(">8")
            .director("akhtar")
            .search("zindagi"),
    ];

    let sizes: Vec<usize> = steps
        .iter()
        .map(|criteria| filter_movies(table.records(), criteria).unwrap().len())
        .collect();

    assert_eq!(sizes, vec![7, 5, 3, 2, 1]);
    assert!(sizes.windows(2).all(|pair| pair[1] <= pair[0]));
}

#[test]
fn test_rating_sort_is_non_increasing_and_stable() {
    let table = load();
    let all: Vec<&MovieRecord> = table.records().iter().collect();

    let sorted = sort_movies(&all, SortKey::Rating);
    assert!(
        sorted
            .windows(2)
            .all(|pair| pair[0].normalized_rating() >= pair[1].normalized_rating())
    );

    // Three movies share 8.1 and stay in table order
    let tied: Vec<String> = sorted
        .iter()
        .filter(|movie| movie.normalized_rating() == 8.1)
        .map(|movie| movie.name.clone())
        .collect();
    assert_eq!(
        tied,
        vec!["Lagaan: Once Upon a Time in India", "Hera Pheri", "Dil Chahta Hai"]
    );
}

#[test]
fn test_full_session() {
    let session = SearchSession::new(Arc::new(load()));
    let criteria = FilterCriteria::new().genre("drama");

    let result = session.search(&criteria, Some("votes")).unwrap();
    assert_eq!(result.movies[0].name, "Lagaan: Once Upon a Time in India");

    let rows = session.rows(&result);
    assert_eq!(rows.len(), result.len());
    assert_eq!(rows[0][1], "(2001)");

    let top = result.top_rated(3);
    assert_eq!(top.len(), 3);
    assert_eq!(top[0].label, "Zindagi Na Milegi Dobara");
    assert!(top.windows(2).all(|pair| pair[0].value >= pair[1].value));
}

#[test]
fn test_top_n_never_exceeds_input() {
    let table = load();
    let all: Vec<&MovieRecord> = table.records().iter().collect();

    for n in [0, 1, 3, 7, 50] {
        assert_eq!(top_n(&all, n).len(), n.min(all.len()));
    }
}
