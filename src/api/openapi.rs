//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{auth, categories, datacenters, equipment, equipment_types, health, network, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Rackline API",
        version = "1.0.0",
        description = "Datacenter & Network Equipment Inventory REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::login,
        auth::register,
        auth::logout,
        auth::profile,
        auth::update_profile,
        // Datacenters
        datacenters::list_datacenters,
        datacenters::get_datacenter,
        datacenters::create_datacenter,
        datacenters::update_datacenter,
        datacenters::delete_datacenter,
        // Categories
        categories::list_categories_by_datacenter,
        categories::get_category,
        categories::create_category,
        categories::update_category,
        categories::delete_category,
        // Equipment types
        equipment_types::list_equipment_types_by_category,
        equipment_types::get_equipment_type,
        equipment_types::create_equipment_type,
        equipment_types::update_equipment_type,
        equipment_types::delete_equipment_type,
        // Equipment
        equipment::list_equipment_by_datacenter,
        equipment::list_equipment_by_type,
        equipment::list_equipment_by_datacenter_and_type,
        equipment::get_equipment,
        equipment::create_equipment,
        equipment::update_equipment,
        equipment::delete_equipment,
        // Network
        network::list_network_equipment_types,
        network::get_network_equipment_type,
        network::create_network_equipment_type,
        network::update_network_equipment_type,
        network::delete_network_equipment_type,
        network::list_network_equipment,
        network::list_network_equipment_by_type,
        network::get_network_equipment,
        network::create_network_equipment,
        network::update_network_equipment,
        network::delete_network_equipment,
        // Users
        users::list_users,
        users::get_user,
        users::create_user,
        users::update_user,
        users::delete_user,
    ),
    components(
        schemas(
            // Auth
            crate::models::user::LoginRequest,
            crate::models::user::RegisterRequest,
            crate::models::user::AuthResponse,
            crate::models::user::UpdateProfile,
            auth::MessageResponse,
            // Users
            crate::models::user::User,
            crate::models::user::Role,
            crate::models::user::CreateUser,
            crate::models::user::UpdateUser,
            // Datacenters
            crate::models::datacenter::Datacenter,
            crate::models::datacenter::CreateDatacenter,
            crate::models::datacenter::UpdateDatacenter,
            datacenters::DeletedDatacenter,
            // Categories
            crate::models::category::Category,
            crate::models::category::CreateCategory,
            crate::models::category::UpdateCategory,
            crate::models::category::DeletedCategory,
            // Equipment types
            crate::models::equipment_type::EquipmentType,
            crate::models::equipment_type::FieldDef,
            crate::models::equipment_type::FieldType,
            crate::models::equipment_type::CreateEquipmentType,
            crate::models::equipment_type::UpdateEquipmentType,
            // Equipment
            crate::models::equipment::Equipment,
            crate::models::equipment::EquipmentWithType,
            crate::models::equipment::CreateEquipment,
            crate::models::equipment::UpdateEquipment,
            // Network
            crate::models::network::NetworkEquipmentType,
            crate::models::network::CreateNetworkEquipmentType,
            crate::models::network::UpdateNetworkEquipmentType,
            crate::models::network::NetworkEquipment,
            crate::models::network::NetworkEquipmentWithType,
            crate::models::network::CreateNetworkEquipment,
            crate::models::network::UpdateNetworkEquipment,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Authentication endpoints"),
        (name = "datacenters", description = "Datacenter management"),
        (name = "categories", description = "Category management"),
        (name = "equipment-types", description = "Equipment type management"),
        (name = "equipments", description = "Equipment management"),
        (name = "network", description = "Network equipment management"),
        (name = "users", description = "User management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
