use super::*;

/// Tests listing the flights departing from an airport.
///
/// Verifies that only flights whose departure airport matches are returned.
///
/// Expected: Ok(Vec<Flight>) with the two SVO departures
#[tokio::test]
async fn gets_flights_for_departure_airport() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_bookings_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::flight::FlightFactory::new(db, "SVO")
        .id(1)
        .number("PG0403")
        .build()
        .await?;
    factory::flight::FlightFactory::new(db, "SVO")
        .id(2)
        .number("PG0404")
        .build()
        .await?;
    factory::flight::FlightFactory::new(db, "LED")
        .id(3)
        .number("PG0405")
        .build()
        .await?;

    let repo = FlightRepository::new(db);
    let flights = repo.get_by_departure_airport("SVO").await?;

    assert_eq!(
        flights,
        vec![
            Flight {
                id: 1,
                number: "PG0403".to_string(),
            },
            Flight {
                id: 2,
                number: "PG0404".to_string(),
            },
        ]
    );

    Ok(())
}

/// Tests an airport code that no flight departs from.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_for_airport_without_flights() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_bookings_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_airport, _flights) = factory::helpers::create_airport_with_flights(db, 2).await?;

    let repo = FlightRepository::new(db);
    let flights = repo.get_by_departure_airport("ZZZ").await?;

    assert!(flights.is_empty());

    Ok(())
}

/// Tests that the airport code is bound as a parameter rather than spliced into SQL.
///
/// Expected: Ok(empty Vec) and the flights table left intact
#[tokio::test]
async fn treats_airport_code_as_literal() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_bookings_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (airport, _flights) = factory::helpers::create_airport_with_flights(db, 1).await?;

    let repo = FlightRepository::new(db);
    let injected = repo
        .get_by_departure_airport("' OR '1'='1")
        .await?;
    assert!(injected.is_empty());

    let flights = repo.get_by_departure_airport(&airport.airport_code).await?;
    assert_eq!(flights.len(), 1);

    Ok(())
}
