use careerflow_core::{
    status_options, visible_jobs, FilterCriteria, Job, JobId, JobStatus, StatusFilter,
};
use pretty_assertions::assert_eq;

fn job(id: i64, company: &str, title: &str, status: JobStatus) -> Job {
    Job {
        id: JobId::Number(id),
        company: company.to_string(),
        title: title.to_string(),
        status,
    }
}

fn sample() -> Vec<Job> {
    vec![
        job(5, "Acme", "Site Reliability Engineer", JobStatus::Wishlist),
        job(4, "Globex", "Engineer", JobStatus::Offer),
        job(3, "Initech", "Analyst", JobStatus::Applied),
        job(2, "Hooli", "Backend Developer", JobStatus::Offer),
        job(1, "Umbrella", "Data Engineer", JobStatus::Rejected),
    ]
}

fn ids(jobs: &[&Job]) -> Vec<JobId> {
    jobs.iter().map(|job| job.id.clone()).collect()
}

#[test]
fn inert_criteria_return_everything_in_order() {
    let jobs = sample();
    let visible = visible_jobs(&jobs, &FilterCriteria::default());

    assert_eq!(visible.into_iter().cloned().collect::<Vec<_>>(), jobs);
}

#[test]
fn query_is_trimmed_and_case_insensitive() {
    let jobs = sample();
    let criteria = FilterCriteria::new("  ENGINEER ", StatusFilter::All);

    assert_eq!(
        ids(&visible_jobs(&jobs, &criteria)),
        vec![JobId::Number(5), JobId::Number(4), JobId::Number(1)]
    );
}

#[test]
fn query_matches_company_or_title() {
    let jobs = sample();

    let by_company = visible_jobs(&jobs, &FilterCriteria::new("hoo", StatusFilter::All));
    assert_eq!(ids(&by_company), vec![JobId::Number(2)]);

    let by_title = visible_jobs(&jobs, &FilterCriteria::new("analyst", StatusFilter::All));
    assert_eq!(ids(&by_title), vec![JobId::Number(3)]);
}

#[test]
fn query_and_status_are_combined() {
    let jobs = sample();
    let criteria = FilterCriteria::new("engineer", StatusFilter::Only(JobStatus::Offer));

    assert_eq!(ids(&visible_jobs(&jobs, &criteria)), vec![JobId::Number(4)]);

    let none = FilterCriteria::new("analyst", StatusFilter::Only(JobStatus::Offer));
    assert!(visible_jobs(&jobs, &none).is_empty());
}

#[test]
fn visible_jobs_is_an_ordered_subsequence() {
    let jobs = sample();
    let queries = ["", "e", "engineer", "x", "ACME"];
    let filters = std::iter::once(StatusFilter::All)
        .chain(JobStatus::ALL.into_iter().map(StatusFilter::Only))
        .collect::<Vec<_>>();

    for query in queries {
        for status in &filters {
            let criteria = FilterCriteria::new(query, *status);
            let visible = visible_jobs(&jobs, &criteria);
            let mut cursor = jobs.iter();
            for shown in &visible {
                assert!(
                    cursor.any(|job| job == *shown),
                    "{query:?}/{status} broke ordering"
                );
            }
            assert_eq!(visible, visible_jobs(&jobs, &criteria));
        }
    }
}

#[test]
fn status_options_start_with_all_and_are_sorted() {
    let options = status_options(&sample());

    assert_eq!(
        options,
        vec![
            StatusFilter::All,
            StatusFilter::Only(JobStatus::Applied),
            StatusFilter::Only(JobStatus::Offer),
            StatusFilter::Only(JobStatus::Rejected),
            StatusFilter::Only(JobStatus::Wishlist),
        ]
    );
    let labels: Vec<String> = options.iter().map(ToString::to_string).collect();
    assert_eq!(labels, ["ALL", "APPLIED", "OFFER", "REJECTED", "WISHLIST"]);
}

#[test]
fn status_options_for_empty_collection() {
    assert_eq!(status_options(&[]), vec![StatusFilter::All]);
}

#[test]
fn status_filter_parses_sentinel_and_values() {
    assert_eq!("ALL".parse::<StatusFilter>().unwrap(), StatusFilter::All);
    assert_eq!(
        "interview".parse::<StatusFilter>().unwrap(),
        StatusFilter::Only(JobStatus::Interview)
    );
    assert!("ARCHIVED".parse::<StatusFilter>().is_err());
}
