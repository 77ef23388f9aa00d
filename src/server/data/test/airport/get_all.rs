use super::*;

/// Tests listing every airport.
///
/// Verifies that the repository returns all airports with their code and
/// display name, ordered by code.
///
/// Expected: Ok(Vec<Airport>) with both airports
#[tokio::test]
async fn gets_all_airports() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_bookings_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::airport::AirportFactory::new(db)
        .code("SVO")
        .name("Sheremetyevo International Airport")
        .build()
        .await?;
    factory::airport::AirportFactory::new(db)
        .code("LED")
        .name("Pulkovo Airport")
        .build()
        .await?;

    let repo = AirportRepository::new(db);
    let airports = repo.get_all().await?;

    assert_eq!(
        airports,
        vec![
            Airport {
                code: "LED".to_string(),
                name: "Pulkovo Airport".to_string(),
            },
            Airport {
                code: "SVO".to_string(),
                name: "Sheremetyevo International Airport".to_string(),
            },
        ]
    );

    Ok(())
}

/// Tests listing airports from an empty table.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_for_empty_table() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_bookings_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AirportRepository::new(db);
    let airports = repo.get_all().await?;

    assert!(airports.is_empty());

    Ok(())
}

/// Tests that a row which fails to scan is skipped without failing the query.
///
/// The table is created by hand so `airport_name` may be NULL, which cannot be
/// scanned into a `String`.
///
/// Expected: Ok(Vec<Airport>) with only the well-formed row
#[tokio::test]
async fn skips_rows_that_fail_to_scan() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().build().await.unwrap();
    test.execute_sql("CREATE TABLE airports (airport_code TEXT PRIMARY KEY, airport_name TEXT)")
        .await
        .unwrap();
    test.execute_sql(
        "INSERT INTO airports (airport_code, airport_name) VALUES ('KZN', NULL), ('SVO', 'Sheremetyevo')",
    )
    .await
    .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AirportRepository::new(db);
    let airports = repo.get_all().await?;

    assert_eq!(airports.len(), 1);
    assert_eq!(airports[0].code, "SVO");

    Ok(())
}

/// Tests that a failing query is returned as an error.
///
/// Expected: Err(DbErr) because the airports table does not exist
#[tokio::test]
async fn fails_when_table_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AirportRepository::new(db);
    let result = repo.get_all().await;

    assert!(result.is_err());

    Ok(())
}
