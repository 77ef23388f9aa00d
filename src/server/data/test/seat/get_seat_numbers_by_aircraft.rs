use super::*;

/// Tests fetching the seat numbers of one aircraft.
///
/// Verifies that seats of other aircraft are not included.
///
/// Expected: Ok(Vec<String>) with the three seats of aircraft 320
#[tokio::test]
async fn gets_seat_numbers_for_aircraft() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_aircraft_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::aircraft::AircraftFactory::new(db)
        .code("320")
        .build()
        .await?;
    factory::seat::create_seats(db, "320", &["1A", "1B", "2A"]).await?;
    let (_other, _seats) = factory::helpers::create_aircraft_with_seats(db, &["9A"]).await?;

    let repo = SeatRepository::new(db);
    let mut seats = repo.get_seat_numbers_by_aircraft("320").await?;
    seats.sort();

    assert_eq!(seats, vec!["1A", "1B", "2A"]);

    Ok(())
}

/// Tests an aircraft without any seats.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_for_aircraft_without_seats() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_aircraft_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let aircraft = factory::aircraft::create_aircraft(db).await?;

    let repo = SeatRepository::new(db);
    let seats = repo
        .get_seat_numbers_by_aircraft(&aircraft.aircraft_code)
        .await?;

    assert!(seats.is_empty());

    Ok(())
}

/// Tests that a seat row which cannot be scanned is skipped.
///
/// The table is created by hand so `seat_no` may be NULL.
///
/// Expected: Ok(Vec<String>) with only the non-NULL seats
#[tokio::test]
async fn skips_rows_that_fail_to_scan() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().build().await.unwrap();
    test.execute_sql("CREATE TABLE seats (aircraft_code TEXT NOT NULL, seat_no TEXT)")
        .await
        .unwrap();
    test.execute_sql(
        "INSERT INTO seats (aircraft_code, seat_no) VALUES ('320', NULL), ('320', '12A'), ('320', '3B')",
    )
    .await
    .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeatRepository::new(db);
    let mut seats = repo.get_seat_numbers_by_aircraft("320").await?;
    seats.sort();

    assert_eq!(seats, vec!["12A", "3B"]);

    Ok(())
}
