//! # Vehicle Commands
//!
//! Vehicle listing and detail, with the display-only availability
//! projection computed client-side.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tauri::State;
use tracing::debug;

use crate::error::ApiError;
use crate::state::ApiState;
use locauto_api::{Page, VehicleFilters};
use locauto_core::availability::{resolve_availability, Availability};
use locauto_core::types::{Vehicle, VehicleStatus};
use locauto_core::Money;

// =============================================================================
// DTOs
// =============================================================================

/// A vehicle as shown in the catalog and on the detail page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDto {
    pub id: i64,
    pub brand: String,
    pub model: String,
    pub registration: String,
    pub daily_rate: Money,
    pub status: VehicleStatus,
    pub status_label: String,
    pub category_id: i64,
    pub agency_id: i64,
    pub image_url: Option<String>,
    /// Display-only projection; the server `status` stays authoritative.
    pub availability: Availability,
}

impl VehicleDto {
    /// Builds the DTO, projecting availability from the embedded
    /// reservations against today's date.
    fn project(vehicle: Vehicle) -> Self {
        let today = Utc::now().date_naive();
        let availability = resolve_availability(vehicle.status, &vehicle.reservations, today);
        VehicleDto {
            id: vehicle.id,
            brand: vehicle.brand,
            model: vehicle.model,
            registration: vehicle.registration,
            daily_rate: vehicle.daily_rate,
            status: vehicle.status,
            status_label: vehicle.status.label_fr().to_string(),
            category_id: vehicle.category_id,
            agency_id: vehicle.agency_id,
            image_url: vehicle.image_url,
            availability,
        }
    }
}

/// One page of the vehicle catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleListResponse {
    pub items: Vec<VehicleDto>,
    pub current_page: u32,
    pub last_page: u32,
    pub total: u64,
}

impl From<Page<Vehicle>> for VehicleListResponse {
    fn from(page: Page<Vehicle>) -> Self {
        VehicleListResponse {
            current_page: page.current_page,
            last_page: page.last_page,
            total: page.total,
            items: page.data.into_iter().map(VehicleDto::project).collect(),
        }
    }
}

// =============================================================================
// Commands
// =============================================================================

#[tauri::command]
pub async fn list_vehicles(
    api: State<'_, ApiState>,
    agency_id: Option<i64>,
    category_id: Option<i64>,
    status: Option<VehicleStatus>,
    page: Option<u32>,
) -> Result<VehicleListResponse, ApiError> {
    debug!(?agency_id, ?category_id, ?status, ?page, "list_vehicles command");

    let filters = VehicleFilters {
        agency_id,
        category_id,
        status,
        page,
    };

    // Public browsing works signed out; the token is attached when present.
    let token = api.token();
    let vehicles = api
        .api()
        .vehicles()
        .list(&filters, token.as_deref())
        .await
        .map_err(|e| api.handle_remote(e))?;

    Ok(VehicleListResponse::from(vehicles))
}

#[tauri::command]
pub async fn get_vehicle(api: State<'_, ApiState>, id: i64) -> Result<VehicleDto, ApiError> {
    debug!(id, "get_vehicle command");

    let token = api.token();
    let vehicle = api
        .api()
        .vehicles()
        .get(id, token.as_deref())
        .await
        .map_err(|e| api.handle_remote(e))?;

    Ok(VehicleDto::project(vehicle))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};
    use locauto_core::types::{Reservation, ReservationStatus};

    fn vehicle(status: VehicleStatus, reservations: Vec<Reservation>) -> Vehicle {
        Vehicle {
            id: 3,
            brand: "Toyota".to_string(),
            model: "Corolla".to_string(),
            registration: "DK-4521-AB".to_string(),
            daily_rate: Money::from_minor(25_000),
            status,
            category_id: 1,
            agency_id: 1,
            image_url: None,
            reservations,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_projection_available_vehicle() {
        let dto = VehicleDto::project(vehicle(VehicleStatus::Available, vec![]));
        assert_eq!(dto.availability, Availability::AvailableNow);
        assert_eq!(dto.status_label, "Disponible");
    }

    #[test]
    fn test_projection_rented_without_reservations() {
        // Server says rented but embeds no reservation rows: the return
        // date is simply unknown, never invented.
        let dto = VehicleDto::project(vehicle(VehicleStatus::Rented, vec![]));
        assert_eq!(dto.availability, Availability::RentedUnknown);
    }

    #[test]
    fn test_projection_rented_until_far_future() {
        let reservation = Reservation {
            id: 7,
            vehicle_id: 3,
            client_id: 11,
            pickup_agency_id: 1,
            return_agency_id: 1,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1),
            end_date: NaiveDate::from_ymd_opt(9999, 12, 31),
            status: ReservationStatus::Confirmed,
            total_price: Money::from_minor(75_000),
        };
        let dto = VehicleDto::project(vehicle(VehicleStatus::Rented, vec![reservation]));
        assert_eq!(
            dto.availability,
            Availability::RentedUntil(NaiveDate::from_ymd_opt(9999, 12, 31).unwrap())
        );
    }
}
