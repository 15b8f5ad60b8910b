use super::*;

/// Tests creating a point in a data type that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn create_point_requires_existing_type() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dynamic_data_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = DynamicDataService::new(db)
        .create_data_point(CreateDataPointDto {
            data_type_id: 999,
            name: "orphan".to_string(),
            description: None,
            sort_order: 0,
            is_active: true,
            extra_data: None,
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests the per-type uniqueness of point names.
///
/// Verifies that names are compared after lowercasing and that the same name is
/// allowed in a different data type.
///
/// Expected: Conflict in the same type, Ok in another type
#[tokio::test]
async fn point_names_are_unique_per_type() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dynamic_data_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let first_type = factory::create_data_type(db).await?;
    let second_type = factory::create_data_type(db).await?;
    factory::create_data_point(db, first_type.id, "phone", 1).await?;

    let service = DynamicDataService::new(db);
    let dto = |data_type_id| CreateDataPointDto {
        data_type_id,
        name: "Phone".to_string(),
        description: None,
        sort_order: 0,
        is_active: true,
        extra_data: None,
    };

    let duplicate = service.create_data_point(dto(first_type.id)).await;
    let other_type = service.create_data_point(dto(second_type.id)).await?;

    assert!(matches!(duplicate, Err(AppError::Conflict(_))));
    assert_eq!(other_type.name, "phone");

    Ok(())
}

/// Tests bulk creation rolling back when one name repeats.
///
/// Expected: Err(AppError::Conflict) and no points stored
#[tokio::test]
async fn bulk_create_is_atomic() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dynamic_data_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let data_type = factory::create_data_type(db).await?;

    let service = DynamicDataService::new(db);
    let result = service
        .bulk_create_data_points(BulkCreateDataPointsDto {
            data_type_id: data_type.id,
            data_points: vec![bulk_item("daily", 1), bulk_item("weekly", 2), bulk_item("DAILY", 3)],
        })
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert!(service
        .get_points_by_type_name(&data_type.name, false)
        .await?
        .is_empty());

    Ok(())
}

/// Tests a successful bulk creation.
///
/// Expected: points returned in request order
#[tokio::test]
async fn bulk_creates_points() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dynamic_data_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let data_type = factory::create_data_type(db).await?;

    let created = DynamicDataService::new(db)
        .bulk_create_data_points(BulkCreateDataPointsDto {
            data_type_id: data_type.id,
            data_points: vec![bulk_item("weekly", 2), bulk_item("daily", 1)],
        })
        .await?;

    let names: Vec<_> = created.iter().map(|point| point.name.as_str()).collect();
    assert_eq!(names, vec!["weekly", "daily"]);

    Ok(())
}

/// Tests searching points by name or description within a data type.
///
/// Expected: only matching points of the requested type
#[tokio::test]
async fn searches_points_case_insensitively() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dynamic_data_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let data_type = factory::create_data_type(db).await?;
    let other_type = factory::create_data_type(db).await?;
    factory::create_data_point(db, data_type.id, "physiotherapy", 1).await?;
    factory::create_data_point(db, data_type.id, "psychology", 2).await?;
    factory::create_data_point(db, other_type.id, "physio_group", 1).await?;

    let service = DynamicDataService::new(db);
    let scoped = service
        .search_data_points("PHYSIO", Some(&data_type.name))
        .await?;
    let unscoped = service.search_data_points("physio", None).await?;
    let unknown = service
        .search_data_points("physio", Some("no_such_type"))
        .await?;

    assert_eq!(scoped.len(), 1);
    assert_eq!(scoped[0].name, "physiotherapy");
    assert_eq!(unscoped.len(), 2);
    assert!(unknown.is_empty());

    Ok(())
}

/// Tests updating and deleting a data point.
///
/// Expected: updated fields persist, then the point is gone
#[tokio::test]
async fn updates_and_deletes_point() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dynamic_data_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let data_type = factory::create_data_type(db).await?;
    let point = factory::create_data_point(db, data_type.id, "sms", 3).await?;

    let service = DynamicDataService::new(db);
    let updated = service
        .update_data_point(
            point.id,
            UpdateDataPointDto {
                description: Some("Text message".to_string()),
                sort_order: Some(1),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.description.as_deref(), Some("Text message"));
    assert_eq!(updated.sort_order, 1);

    service.delete_data_point(point.id).await?;
    assert!(matches!(
        service.get_data_point(point.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests renaming a data point to a blank name.
///
/// Expected: Err(AppError::BadRequest) and the stored name is unchanged
#[tokio::test]
async fn rename_point_to_blank_name_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dynamic_data_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let data_type = factory::create_data_type(db).await?;
    let point = factory::create_data_point(db, data_type.id, "email", 1).await?;

    let service = DynamicDataService::new(db);
    let result = service
        .update_data_point(
            point.id,
            UpdateDataPointDto {
                name: Some(String::new()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(service.get_data_point(point.id).await?.name, "email");

    Ok(())
}
