//! Integration tests per manutenzioni e impianti

mod common;

use common::*;
use greengrid::dtos::{MaintenanceDraft, PowerPlantDraft};
use greengrid::entities::{EnergyType, MaintenanceRecord, MaintenanceType, PowerPlant};
use greengrid::reports::maintenance_report;
use greengrid::repositories::RestCollection;
use greengrid::services::{ListController, ListStatus, UnitDirectory};

#[tokio::test]
async fn maintenance_lifecycle_create_edit_delete() {
    let backend = MockBackend::new();
    backend.seed("maintenance", vec![]);
    let base_url = spawn_backend(backend).await;
    let mut controller: ListController<MaintenanceRecord> =
        ListController::new(RestCollection::new(client_for(&base_url)));
    controller.load().await;

    controller
        .create(MaintenanceDraft {
            unit_id: Some(2),
            maintenance_type: Some(MaintenanceType::ConditionBased),
            maintenance_date: "2024-02-10".to_string(),
            record_specifications: "Vibration survey".to_string(),
        })
        .await;
    assert_eq!(controller.status(), ListStatus::Ready);
    assert_eq!(controller.items().len(), 1);
    assert_eq!(
        controller.items()[0].maintenance_type,
        MaintenanceType::ConditionBased
    );

    let id = controller.items()[0].record_id;
    controller.begin_edit(&id);
    let mut draft = controller.form_draft().unwrap().clone();
    draft.record_specifications = "Vibration survey + bearing swap".to_string();
    controller.update(id, draft).await;
    assert_eq!(
        controller.items()[0].record_specifications,
        "Vibration survey + bearing swap"
    );

    controller.remove(id).await;
    assert_eq!(controller.status(), ListStatus::Ready);
    assert!(controller.items().is_empty());
}

#[tokio::test]
async fn maintenance_report_resolves_the_unit_name() {
    let backend = MockBackend::new();
    backend.seed("units", vec![unit_json(2, "Inverter Station")]);
    backend.seed("maintenance", vec![maintenance_json(4, 2, "2024-02-10")]);
    let base_url = spawn_backend(backend).await;
    let mut directory = UnitDirectory::new(client_for(&base_url));
    directory.load().await.unwrap();
    let mut controller: ListController<MaintenanceRecord> =
        ListController::new(RestCollection::new(client_for(&base_url)));
    controller.load().await;

    let record = &controller.items()[0];
    let report = maintenance_report(record, directory.unit_name(record.unit_id));

    let row = &report.rows()[0];
    assert_eq!(row[0], "Inverter Station");
    assert_eq!(row[3], "Preventive");
    assert_eq!(row[5], "N/A (N/A)");
}

#[tokio::test]
async fn power_plant_capacity_is_typed_on_the_wire() {
    let backend = MockBackend::new();
    backend.seed("powerplants", vec![power_plant_json(1, "Valgrana")]);
    let base_url = spawn_backend(backend.clone()).await;
    let mut controller: ListController<PowerPlant> =
        ListController::new(RestCollection::new(client_for(&base_url)));
    controller.load().await;
    assert_eq!(controller.items()[0].type_of_energy, EnergyType::Hydro);

    controller
        .create(PowerPlantDraft {
            name: "Pian dell'Orso".to_string(),
            location: "location1".to_string(),
            capacity: "75.5".to_string(),
            type_of_energy: Some(EnergyType::Wind),
        })
        .await;

    assert_eq!(controller.status(), ListStatus::Ready);
    assert_eq!(controller.items().len(), 2);
    let body = backend.last_write_body().unwrap();
    // la capacità viaggia come numero, non come stringa di form
    assert_eq!(body["capacity"], 75.5);
    assert_eq!(body["type_of_energy"], "wind");
}
