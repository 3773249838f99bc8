use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use shared_database::{ClinicDb, StoreError};
use shared_models::service::{PriceRange, Service, ServiceCategory};

use crate::models::{CreateServiceRequest, ServiceError, ServiceListQuery, UpdateServiceRequest};

const MIN_DURATION_MINUTES: u32 = 5;
const MAX_DURATION_MINUTES: u32 = 480;

/// Service catalogue: public reads plus catalogue administration. Only active
/// services are offered, popular ones sort first.
pub struct CatalogService {
    db: Arc<ClinicDb>,
}

impl CatalogService {
    pub fn new(db: Arc<ClinicDb>) -> Self {
        Self { db }
    }

    pub async fn list(&self, query: ServiceListQuery) -> Vec<Service> {
        let services: Vec<Service> = self
            .db
            .list_services()
            .await
            .into_iter()
            .filter(|service| service.is_active)
            .filter(|service| {
                query
                    .category
                    .map_or(true, |wanted| service.category == wanted)
            })
            .filter(|service| query.popular.map_or(true, |wanted| service.is_popular == wanted))
            .filter(|service| {
                query
                    .q
                    .as_deref()
                    .map_or(true, |needle| service.matches_query(needle))
            })
            .collect();
        debug!(count = services.len(), "listed services");
        services
    }

    pub async fn get(&self, id: Uuid) -> Result<Service, ServiceError> {
        self.db
            .find_service(id)
            .await
            .filter(|service| service.is_active)
            .ok_or(ServiceError::NotFound)
    }

    /// Distinct categories among active services.
    pub async fn categories(&self) -> Vec<ServiceCategory> {
        let mut categories = Vec::new();
        for service in self.db.list_services().await {
            if service.is_active && !categories.contains(&service.category) {
                categories.push(service.category);
            }
        }
        categories
    }

    pub async fn create(&self, request: CreateServiceRequest) -> Result<Service, ServiceError> {
        validate_name(&request.name)?;
        validate_duration(request.duration_minutes)?;
        validate_price_range(request.price_range)?;

        let service = self
            .db
            .insert_service(Service {
                id: Uuid::new_v4(),
                name: request.name.trim().to_string(),
                description: request.description,
                category: request.category,
                price_range: request.price_range,
                duration_minutes: request.duration_minutes,
                features: request.features,
                is_active: true,
                is_popular: request.is_popular,
                tags: request.tags.into_iter().map(|tag| tag.to_lowercase()).collect(),
            })
            .await;

        info!(service_id = %service.id, "service created");
        Ok(service)
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateServiceRequest,
    ) -> Result<Service, ServiceError> {
        if let Some(name) = request.name.as_deref() {
            validate_name(name)?;
        }
        if let Some(duration_minutes) = request.duration_minutes {
            validate_duration(duration_minutes)?;
        }
        if let Some(price_range) = request.price_range {
            validate_price_range(price_range)?;
        }

        let updated = self
            .db
            .update_service(id, |service| {
                if let Some(name) = request.name {
                    service.name = name.trim().to_string();
                }
                if let Some(description) = request.description {
                    service.description = description;
                }
                if let Some(category) = request.category {
                    service.category = category;
                }
                if let Some(price_range) = request.price_range {
                    service.price_range = price_range;
                }
                if let Some(duration_minutes) = request.duration_minutes {
                    service.duration_minutes = duration_minutes;
                }
                if let Some(features) = request.features {
                    service.features = features;
                }
                if let Some(is_active) = request.is_active {
                    service.is_active = is_active;
                }
                if let Some(is_popular) = request.is_popular {
                    service.is_popular = is_popular;
                }
                if let Some(tags) = request.tags {
                    service.tags = tags.into_iter().map(|tag| tag.to_lowercase()).collect();
                }
            })
            .await
            .map_err(map_store_error)?;

        info!(service_id = %id, "service updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        self.db.delete_service(id).await.map_err(map_store_error)?;
        info!(service_id = %id, "service deleted");
        Ok(())
    }
}

fn map_store_error(err: StoreError) -> ServiceError {
    match err {
        StoreError::NotFound => ServiceError::NotFound,
        StoreError::SlotHeld { .. } => ServiceError::NotFound,
    }
}

fn validate_name(name: &str) -> Result<(), ServiceError> {
    if name.trim().is_empty() {
        return Err(ServiceError::Validation("name is required".to_string()));
    }
    Ok(())
}

fn validate_duration(duration_minutes: u32) -> Result<(), ServiceError> {
    if !(MIN_DURATION_MINUTES..=MAX_DURATION_MINUTES).contains(&duration_minutes) {
        return Err(ServiceError::Validation(format!(
            "duration must be between {} and {} minutes",
            MIN_DURATION_MINUTES, MAX_DURATION_MINUTES
        )));
    }
    Ok(())
}

fn validate_price_range(price_range: PriceRange) -> Result<(), ServiceError> {
    if price_range.min > price_range.max {
        return Err(ServiceError::Validation(
            "price range minimum cannot exceed its maximum".to_string(),
        ));
    }
    Ok(())
}
