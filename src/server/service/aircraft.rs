use std::{
    sync::{Arc, Mutex, PoisonError},
    time::Instant,
};

use futures::future::join_all;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::aircraft::AircraftRepository,
    error::AppError,
    model::aircraft::{Aircraft, AircraftResult},
    service::seat::SeatService,
};

pub struct AircraftService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AircraftService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every aircraft
    pub async fn get_all(&self) -> Result<Vec<Aircraft>, AppError> {
        let repo = AircraftRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Lists every aircraft and computes the squared seat sum of each concurrently.
    ///
    /// # Returns
    /// - `Ok(Vec<AircraftResult>)` - One result per aircraft, in completion order
    /// - `Err(AppError::DbErr)` - The aircraft list could not be fetched
    pub async fn calculate_all(&self) -> Result<Vec<AircraftResult>, AppError> {
        let aircraft = self.get_all().await?;

        Ok(self.calculate_squares(aircraft).await)
    }

    /// Computes the squared seat sum of each aircraft in its own task.
    ///
    /// One tokio task is spawned per aircraft. Each task times its own seat query and
    /// reduction, then appends its result to a shared list; the lock is held only for
    /// that append. All tasks are awaited before returning, with no timeout, so the
    /// slowest seat query bounds the whole call. Every task shares the connection pool,
    /// whose size limits how many seat queries run at once.
    ///
    /// Results are in completion order, not input order. A task that panics is logged
    /// and contributes no result; every other aircraft yields exactly one.
    ///
    /// # Arguments
    /// - `aircraft` - Aircraft to compute results for
    ///
    /// # Returns
    /// - `Vec<AircraftResult>` - At most one result per aircraft
    pub async fn calculate_squares(&self, aircraft: Vec<Aircraft>) -> Vec<AircraftResult> {
        let results = Arc::new(Mutex::new(Vec::with_capacity(aircraft.len())));

        let (codes, handles): (Vec<_>, Vec<_>) = aircraft
            .into_iter()
            .map(|aircraft| {
                let db = self.db.clone();
                let results = Arc::clone(&results);
                let code = aircraft.code.clone();

                let handle = tokio::spawn(async move {
                    let start = Instant::now();
                    let seat_sum = SeatService::new(&db)
                        .sum_seat_numbers(&aircraft.code)
                        .await;
                    let elapsed = start.elapsed();

                    results
                        .lock()
                        .unwrap_or_else(PoisonError::into_inner)
                        .push(AircraftResult {
                            aircraft_code: aircraft.code,
                            square: seat_sum.square,
                            elapsed,
                        });
                });

                (code, handle)
            })
            .unzip();

        for (code, joined) in codes.into_iter().zip(join_all(handles).await) {
            if let Err(e) = joined {
                tracing::error!("Seat calculation task for aircraft {} failed: {}", code, e);
            }
        }

        let results = {
            let mut guard = results.lock().unwrap_or_else(PoisonError::into_inner);
            std::mem::take(&mut *guard)
        };

        tracing::debug!("Calculated seat squares for {} aircraft", results.len());

        results
    }
}
