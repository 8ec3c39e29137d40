use careerflow_core::{Job, JobId, JobStatus, NewJob};

#[test]
fn job_ids_may_be_numbers_or_strings() {
    let jobs: Vec<Job> = serde_json::from_str(
        r#"[
            {"id": 1, "company": "Globex", "title": "Engineer", "status": "OFFER"},
            {"id": "a-2", "company": "Acme", "title": "SRE", "status": "WISHLIST"}
        ]"#,
    )
    .unwrap();

    assert_eq!(jobs[0].id, JobId::Number(1));
    assert_eq!(jobs[0].status, JobStatus::Offer);
    assert_eq!(jobs[1].id, JobId::Text("a-2".to_string()));
    assert_eq!(jobs[1].id.to_string(), "a-2");
}

#[test]
fn unknown_status_is_a_decode_error() {
    let result = serde_json::from_str::<Job>(
        r#"{"id": 1, "company": "Globex", "title": "Engineer", "status": "GHOSTED"}"#,
    );

    assert!(result.is_err());
}

#[test]
fn new_job_serializes_wire_names() {
    let body = serde_json::to_value(NewJob {
        company: "Acme".to_string(),
        title: "SRE".to_string(),
        status: JobStatus::Interview,
    })
    .unwrap();

    assert_eq!(
        body,
        serde_json::json!({"company": "Acme", "title": "SRE", "status": "INTERVIEW"})
    );
}
