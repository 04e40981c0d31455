use crate::domain::a005_defect::api::resolve_defect;
use crate::domain::a007_order::api::update_order;
use contracts::domain::a005_defect::{Defect, DefectResolutionDto, DefectStatus};
use contracts::domain::a007_order::{OrderUpdateDto, ORDER_STATUS_COMPLETED};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Raw values of the resolution form
#[derive(Debug, Clone, PartialEq)]
pub struct ResolutionForm {
    pub status: String,
    pub resolution: String,
    pub update_order: bool,
    pub order_status: String,
    pub order_remark: String,
}

impl ResolutionForm {
    pub fn for_defect(defect: &Defect) -> Self {
        let status = match defect.status {
            DefectStatus::Unknown | DefectStatus::Open => DefectStatus::Resolved,
            other => other,
        };
        Self {
            status: status.as_str().to_string(),
            resolution: defect.resolution.clone().unwrap_or_default(),
            update_order: false,
            order_status: ORDER_STATUS_COMPLETED.to_string(),
            order_remark: String::new(),
        }
    }
}

/// Requests the form turns into: the defect resolution and, when asked for
/// and the defect is linked to an order, the order update.
pub fn resolution_requests(
    defect: &Defect,
    form: &ResolutionForm,
) -> Result<(DefectResolutionDto, Option<(String, OrderUpdateDto)>), String> {
    let resolution = DefectResolutionDto {
        status: DefectStatus::from_str(&form.status),
        resolution: form.resolution.trim().to_string(),
    };
    resolution.validate()?;

    let linked_order = defect
        .order_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty());
    let order = match (linked_order, form.update_order) {
        (Some(order_id), true) => {
            let remark = form.order_remark.trim();
            let dto = OrderUpdateDto {
                status: form.order_status.clone(),
                remark: (!remark.is_empty()).then(|| remark.to_string()),
            };
            dto.validate()?;
            Some((order_id.to_string(), dto))
        }
        (None, true) => return Err("This defect is not linked to an order".into()),
        _ => None,
    };

    Ok((resolution, order))
}

#[derive(Clone, Copy)]
pub struct DefectResolutionViewModel {
    pub defect: StoredValue<Defect>,
    pub form: RwSignal<ResolutionForm>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl DefectResolutionViewModel {
    pub fn new(defect: Defect) -> Self {
        let form = ResolutionForm::for_defect(&defect);
        Self {
            defect: StoredValue::new(defect),
            form: RwSignal::new(form),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    /// The resolution is stored first; the order is only touched after it succeeded.
    pub fn save_command(&self, on_saved: Callback<()>) {
        let requests = self
            .defect
            .with_value(|d| resolution_requests(d, &self.form.get_untracked()));
        let (resolution, order) = match requests {
            Ok(r) => r,
            Err(e) => {
                log::warn!("Defect resolution rejected: {}", e);
                self.error.set(Some(e));
                return;
            }
        };

        let id = self.defect.with_value(|d| d.id.clone());
        let (error, saving) = (self.error, self.saving);
        saving.set(true);
        error.set(None);
        spawn_local(async move {
            if let Err(e) = resolve_defect(&id, &resolution).await {
                log::error!("Failed to resolve defect {}: {}", id, e);
                error.set(Some(e));
                saving.set(false);
                return;
            }
            log::info!("Defect {} set to {}", id, resolution.status.as_str());

            if let Some((order_id, dto)) = order {
                if let Err(e) = update_order(&order_id, &dto).await {
                    log::error!("Failed to update order {}: {}", order_id, e);
                    error.set(Some(format!("Defect saved, order update failed: {}", e)));
                    saving.set(false);
                    return;
                }
                log::info!("Order {} set to {}", order_id, dto.status);
            }

            saving.set(false);
            on_saved.run(());
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a005_defect::Severity;
    use contracts::domain::a007_order::ORDER_STATUS_ON_HOLD;

    fn defect(order_id: Option<&str>) -> Defect {
        Defect {
            id: "d1".into(),
            order_id: order_id.map(String::from),
            category: "Stitching".into(),
            description: "Loose seam".into(),
            severity: Severity::Major,
            status: DefectStatus::Open,
            resolution: None,
            reported_at: None,
        }
    }

    #[test]
    fn test_open_defect_defaults_to_resolved() {
        let form = ResolutionForm::for_defect(&defect(None));
        assert_eq!(form.status, "resolved");
        assert!(!form.update_order);
    }

    #[test]
    fn test_resolution_text_required_for_resolved() {
        let d = defect(None);
        let form = ResolutionForm::for_defect(&d);
        assert!(resolution_requests(&d, &form).is_err());

        let form = ResolutionForm {
            resolution: " Reworked seam ".into(),
            ..form
        };
        let (dto, order) = resolution_requests(&d, &form).unwrap();
        assert_eq!(dto.resolution, "Reworked seam");
        assert!(order.is_none());
    }

    #[test]
    fn test_order_update_only_when_requested_and_linked() {
        let d = defect(Some("o7"));
        let form = ResolutionForm {
            status: "in_progress".into(),
            resolution: String::new(),
            update_order: true,
            order_status: ORDER_STATUS_ON_HOLD.into(),
            order_remark: "  ".into(),
        };
        let (_, order) = resolution_requests(&d, &form).unwrap();
        let (order_id, dto) = order.unwrap();
        assert_eq!(order_id, "o7");
        assert_eq!(dto.status, "on_hold");
        assert_eq!(dto.remark, None);

        let unlinked = defect(None);
        assert!(resolution_requests(&unlinked, &form).is_err());

        let bad_status = ResolutionForm {
            order_status: "shipped".into(),
            ..form
        };
        assert!(resolution_requests(&d, &bad_status).is_err());
    }

    #[test]
    fn test_blank_order_id_counts_as_unlinked() {
        let blank = defect(Some("  "));
        let form = ResolutionForm {
            status: "in_progress".into(),
            resolution: String::new(),
            update_order: true,
            order_status: ORDER_STATUS_ON_HOLD.into(),
            order_remark: String::new(),
        };
        assert_eq!(
            resolution_requests(&blank, &form).unwrap_err(),
            "This defect is not linked to an order"
        );
    }
}
