use super::*;

/// Tests listing every aircraft ordered by code.
///
/// Expected: Ok(Vec<Aircraft>) with all three aircraft
#[tokio::test]
async fn gets_all_aircraft() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_aircraft_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for code in ["773", "320", "SU9"] {
        factory::aircraft::AircraftFactory::new(db)
            .code(code)
            .build()
            .await?;
    }

    let repo = AircraftRepository::new(db);
    let aircraft = repo.get_all().await?;

    let codes: Vec<&str> = aircraft.iter().map(|a| a.code.as_str()).collect();
    assert_eq!(codes, vec!["320", "773", "SU9"]);

    Ok(())
}

/// Tests that aircraft are listed even when they have no seats.
///
/// Expected: Ok(Vec<Aircraft>) containing the seatless aircraft
#[tokio::test]
async fn includes_aircraft_without_seats() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_aircraft_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::aircraft::create_aircraft(db).await?;

    let repo = AircraftRepository::new(db);
    let aircraft = repo.get_all().await?;

    assert_eq!(
        aircraft,
        vec![Aircraft {
            code: created.aircraft_code,
        }]
    );

    Ok(())
}
