use pretty_assertions::assert_eq;
use slotbook_core::availability::AppointmentLookup;
use slotbook_core::models::appointment::{AppointmentStatus, ServiceType};
use slotbook_db::{repositories, Store};
use uuid::Uuid;

#[tokio::test]
async fn test_user_crud_round_trip() {
    let store = Store::new();

    let created = repositories::user::create_user(&store, "user@example.com", "Test User", Some(30))
        .await
        .unwrap();
    assert_eq!(created.email, "user@example.com");
    assert_eq!(created.age, Some(30));

    let fetched = repositories::user::get_user_by_id(&store, created.id)
        .await
        .unwrap()
        .expect("User should exist");
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name, "Test User");

    let updated = repositories::user::update_user(&store, created.id, None, Some("Renamed"), None)
        .await
        .unwrap()
        .expect("User should exist");
    assert_eq!(updated.name, "Renamed");
    // Untouched fields survive a partial update
    assert_eq!(updated.email, "user@example.com");
    assert_eq!(updated.age, Some(30));
    assert!(updated.updated_at >= created.updated_at);

    let deleted = repositories::user::delete_user(&store, created.id)
        .await
        .unwrap();
    assert!(deleted);
    assert!(repositories::user::get_user_by_id(&store, created.id)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_get_all_users_counts_every_user() {
    let store = Store::new();

    for i in 0..3 {
        repositories::user::create_user(&store, &format!("user{i}@example.com"), "User", None)
            .await
            .unwrap();
    }

    let all = repositories::user::get_all_users(&store).await.unwrap();
    assert_eq!(all.len(), 3);
}

#[tokio::test]
async fn test_update_unknown_user_returns_none() {
    let store = Store::new();

    let result = repositories::user::update_user(&store, Uuid::new_v4(), None, Some("Name"), None)
        .await
        .unwrap();
    assert!(result.is_none());

    let deleted = repositories::user::delete_user(&store, Uuid::new_v4())
        .await
        .unwrap();
    assert!(!deleted);
}

#[tokio::test]
async fn test_create_appointment_generates_reference() {
    let store = Store::new();

    let appointment = repositories::appointment::create_appointment(
        &store,
        Uuid::new_v4(),
        "06/01/2023",
        "09:00",
        ServiceType::Passport,
    )
    .await
    .unwrap();

    assert_eq!(appointment.booking_reference.len(), 8);
    assert_eq!(appointment.status, AppointmentStatus::Confirmed);

    let fetched =
        repositories::appointment::get_appointment_by_reference(&store, &appointment.booking_reference)
            .await
            .unwrap()
            .expect("Appointment should exist");
    assert_eq!(fetched.id, appointment.id);
}

#[tokio::test]
async fn test_appointments_by_date_preserve_booking_order() {
    let store = Store::new();
    let user_id = Uuid::new_v4();

    for start_time in ["16:00", "09:00", "13:00"] {
        repositories::appointment::create_appointment(
            &store,
            user_id,
            "06/01/2023",
            start_time,
            ServiceType::Tax,
        )
        .await
        .unwrap();
    }
    // A different date must not leak into the result
    repositories::appointment::create_appointment(
        &store,
        user_id,
        "09/01/2023",
        "09:00",
        ServiceType::Tax,
    )
    .await
    .unwrap();

    let appointments = repositories::appointment::get_appointments_by_date(&store, "06/01/2023")
        .await
        .unwrap();

    let start_times: Vec<&str> = appointments.iter().map(|a| a.start_time.as_str()).collect();
    assert_eq!(start_times, vec!["16:00", "09:00", "13:00"]);
}

#[tokio::test]
async fn test_cancel_appointment_retains_row() {
    let store = Store::new();

    let appointment = repositories::appointment::create_appointment(
        &store,
        Uuid::new_v4(),
        "06/01/2023",
        "09:00",
        ServiceType::DrivingLicense,
    )
    .await
    .unwrap();

    let cancelled =
        repositories::appointment::cancel_appointment(&store, &appointment.booking_reference)
            .await
            .unwrap()
            .expect("Appointment should exist");
    assert_eq!(cancelled.status, AppointmentStatus::Cancelled);

    // Cancelled rows stay queryable for history
    let appointments = repositories::appointment::get_appointments_by_date(&store, "06/01/2023")
        .await
        .unwrap();
    assert_eq!(appointments.len(), 1);
    assert_eq!(appointments[0].status, AppointmentStatus::Cancelled);
}

#[tokio::test]
async fn test_cancel_unknown_reference_returns_none() {
    let store = Store::new();

    let result = repositories::appointment::cancel_appointment(&store, "NOSUCHRF")
        .await
        .unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_store_implements_appointment_lookup() {
    let store = Store::new();

    repositories::appointment::create_appointment(
        &store,
        Uuid::new_v4(),
        "06/01/2023",
        "10:30",
        ServiceType::Passport,
    )
    .await
    .unwrap();

    let via_trait = store.list_appointments_for_date("06/01/2023").await.unwrap();
    let via_repo = repositories::appointment::get_appointments_by_date(&store, "06/01/2023")
        .await
        .unwrap();

    assert_eq!(via_trait.len(), 1);
    assert_eq!(via_trait[0].id, via_repo[0].id);
}
