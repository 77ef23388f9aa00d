use super::*;

/// Tests summing the seats of aircraft 320 (1A, 1B, 2A).
///
/// Expected: sum 4, square 16
#[tokio::test]
async fn sums_seat_numbers() {
    let test = TestBuilder::new()
        .with_aircraft_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::aircraft::AircraftFactory::new(db)
        .code("320")
        .build()
        .await
        .unwrap();
    factory::seat::create_seats(db, "320", &["1A", "1B", "2A"])
        .await
        .unwrap();

    let seat_sum = SeatService::new(db).sum_seat_numbers("320").await;

    assert_eq!(seat_sum, SeatSum { sum: 4, square: 16 });
}

/// Tests that malformed seat numbers contribute zero.
///
/// Expected: only 12C and 3D are counted
#[tokio::test]
async fn ignores_malformed_seat_numbers() {
    let test = TestBuilder::new()
        .with_aircraft_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (aircraft, _seats) = factory::helpers::create_aircraft_with_seats(db, &["A1A", "12C", "3D"])
        .await
        .unwrap();

    let seat_sum = SeatService::new(db)
        .sum_seat_numbers(&aircraft.aircraft_code)
        .await;

    assert_eq!(seat_sum.sum, 15);
}

/// Tests that a failing seat query degrades to zero instead of erroring.
///
/// Expected: SeatSum::default() because the seats table does not exist
#[tokio::test]
async fn returns_zero_when_query_fails() {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let seat_sum = SeatService::new(db).sum_seat_numbers("320").await;

    assert_eq!(seat_sum, SeatSum::default());
}

/// Tests that a NULL seat number is skipped and the other seats still count.
///
/// Expected: sum 15 from 12A and 3B, square 225
#[tokio::test]
async fn skips_unscannable_seat_rows() {
    let mut test = TestBuilder::new().build().await.unwrap();
    test.execute_sql("CREATE TABLE seats (aircraft_code TEXT NOT NULL, seat_no TEXT)")
        .await
        .unwrap();
    test.execute_sql(
        "INSERT INTO seats (aircraft_code, seat_no) VALUES ('320', '12A'), ('320', NULL), ('320', '3B')",
    )
    .await
    .unwrap();
    let db = test.db.as_ref().unwrap();

    let seat_sum = SeatService::new(db).sum_seat_numbers("320").await;

    assert_eq!(seat_sum, SeatSum { sum: 15, square: 225 });
}
