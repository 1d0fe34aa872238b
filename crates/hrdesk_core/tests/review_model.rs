use hrdesk_core::{
    Employee, EmployeeId, EmployeeLookup, RepoError, RepoResult, Review, ReviewValidationError,
};
use std::collections::HashMap;

struct StaticEmployees(HashMap<EmployeeId, Employee>);

impl StaticEmployees {
    fn with_ids(ids: &[EmployeeId]) -> Self {
        let employees = ids
            .iter()
            .map(|&id| {
                let mut employee = Employee::new("Lee", "Manager", None);
                employee.id = Some(id);
                (id, employee)
            })
            .collect();
        Self(employees)
    }
}

impl EmployeeLookup for StaticEmployees {
    fn find_employee(&self, id: EmployeeId) -> RepoResult<Option<Employee>> {
        Ok(self.0.get(&id).cloned())
    }
}

fn assert_validation(result: RepoResult<Review>, expected: ReviewValidationError) {
    match result {
        Err(RepoError::Validation(err)) => assert_eq!(err, expected),
        other => panic!("expected validation error {expected:?}, got {other:?}"),
    }
}

#[test]
fn new_review_is_unsaved_and_keeps_attributes() {
    let employees = StaticEmployees::with_ids(&[7]);
    let review = Review::new(2023, "Good work", 7, &employees).unwrap();

    assert_eq!(review.id(), None);
    assert!(!review.is_persisted());
    assert_eq!(review.year(), 2023);
    assert_eq!(review.summary(), "Good work");
    assert_eq!(review.employee_id(), 7);
}

#[test]
fn years_from_2000_are_accepted() {
    let employees = StaticEmployees::with_ids(&[1]);
    for year in [2000, 2001, 2024, 9999] {
        let review = Review::new(year, "ok", 1, &employees).unwrap();
        assert_eq!(review.year(), year);
    }
}

#[test]
fn years_before_2000_are_rejected() {
    let employees = StaticEmployees::with_ids(&[1]);
    for year in [1999, 0, -2023] {
        assert_validation(
            Review::new(year, "ok", 1, &employees),
            ReviewValidationError::InvalidYear,
        );
    }
}

#[test]
fn empty_summary_is_rejected() {
    let employees = StaticEmployees::with_ids(&[1]);
    assert_validation(
        Review::new(2023, "", 1, &employees),
        ReviewValidationError::InvalidSummary,
    );
}

#[test]
fn unknown_employee_is_rejected() {
    let employees = StaticEmployees::with_ids(&[1, 2]);
    assert!(Review::new(2023, "ok", 2, &employees).is_ok());
    assert_validation(
        Review::new(2023, "ok", 3, &employees),
        ReviewValidationError::InvalidEmployeeId,
    );
}

#[test]
fn failed_setters_keep_previous_values() {
    let employees = StaticEmployees::with_ids(&[1, 2]);
    let mut review = Review::new(2022, "first", 1, &employees).unwrap();

    assert_eq!(
        review.set_year(1980),
        Err(ReviewValidationError::InvalidYear)
    );
    assert_eq!(
        review.set_summary(""),
        Err(ReviewValidationError::InvalidSummary)
    );
    assert!(matches!(
        review.set_employee_id(99, &employees),
        Err(RepoError::Validation(ReviewValidationError::InvalidEmployeeId))
    ));

    assert_eq!(review.year(), 2022);
    assert_eq!(review.summary(), "first");
    assert_eq!(review.employee_id(), 1);

    review.set_year(2024).unwrap();
    review.set_summary("Revised").unwrap();
    review.set_employee_id(2, &employees).unwrap();
    assert_eq!(review.year(), 2024);
    assert_eq!(review.summary(), "Revised");
    assert_eq!(review.employee_id(), 2);
}

#[test]
fn validation_messages_are_stable() {
    assert_eq!(
        ReviewValidationError::InvalidSummary.to_string(),
        "Summary must be a non-empty string"
    );
    assert_eq!(
        ReviewValidationError::InvalidEmployeeId.to_string(),
        "employee_id must be an integer corresponding to an existing employee"
    );
    assert!(ReviewValidationError::InvalidYear
        .to_string()
        .starts_with("Year must be an integer"));
}

#[test]
fn display_matches_review_repr() {
    let employees = StaticEmployees::with_ids(&[4]);
    let unsaved = Review::new(2021, "Solid", 4, &employees).unwrap();
    assert_eq!(unsaved.to_string(), "<Review None: 2021, Solid, Employee: 4>");

    let saved = Review::with_id(Some(12), 2021, "Solid", 4, &employees).unwrap();
    assert_eq!(saved.to_string(), "<Review 12: 2021, Solid, Employee: 4>");
}

#[test]
fn review_serializes_with_column_names() {
    let employees = StaticEmployees::with_ids(&[3]);
    let review = Review::with_id(Some(5), 2020, "Reliable", 3, &employees).unwrap();

    let json = serde_json::to_value(&review).unwrap();
    assert_eq!(json["id"], 5);
    assert_eq!(json["year"], 2020);
    assert_eq!(json["summary"], "Reliable");
    assert_eq!(json["employee_id"], 3);
}
