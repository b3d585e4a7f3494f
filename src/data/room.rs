use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    JoinType, QueryFilter, QuerySelect, RelationTrait,
};

use crate::model::db::{RoomFeatureModel, RoomModel};

pub struct RoomRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoomRepository<'a, C> {
    /// Creates a new instance of [`RoomRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, number: &str) -> Result<RoomModel, DbErr> {
        let room = entity::room::ActiveModel {
            number: ActiveValue::Set(number.to_string()),
            ..Default::default()
        };

        room.insert(self.db).await
    }

    pub async fn find_by_id(&self, room_id: i32) -> Result<Option<RoomModel>, DbErr> {
        entity::prelude::Room::find_by_id(room_id).one(self.db).await
    }

    pub async fn list(&self) -> Result<Vec<RoomModel>, DbErr> {
        entity::prelude::Room::find().all(self.db).await
    }

    pub async fn update_number(&self, room: RoomModel, number: &str) -> Result<RoomModel, DbErr> {
        let mut room: entity::room::ActiveModel = room.into();
        room.number = ActiveValue::Set(number.to_string());

        room.update(self.db).await
    }

    pub async fn delete(&self, room_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Room::delete_by_id(room_id)
            .exec(self.db)
            .await
    }

    pub async fn features_of(&self, room_id: i32) -> Result<Vec<RoomFeatureModel>, DbErr> {
        entity::prelude::RoomFeature::find()
            .join(
                JoinType::InnerJoin,
                entity::room_feature::Relation::RoomFeatureAssignment.def(),
            )
            .filter(entity::room_feature_assignment::Column::RoomId.eq(room_id))
            .all(self.db)
            .await
    }

    pub async fn list_features(&self) -> Result<Vec<RoomFeatureModel>, DbErr> {
        entity::prelude::RoomFeature::find().all(self.db).await
    }

    pub async fn find_features_by_ids(&self, ids: &[i32]) -> Result<Vec<RoomFeatureModel>, DbErr> {
        entity::prelude::RoomFeature::find()
            .filter(entity::room_feature::Column::Id.is_in(ids.to_vec()))
            .all(self.db)
            .await
    }

    /// Replaces the room's feature set with the given feature ids
    pub async fn set_features(&self, room_id: i32, feature_ids: &[i32]) -> Result<(), DbErr> {
        entity::prelude::RoomFeatureAssignment::delete_many()
            .filter(entity::room_feature_assignment::Column::RoomId.eq(room_id))
            .exec(self.db)
            .await?;

        if feature_ids.is_empty() {
            return Ok(());
        }

        let assignments = feature_ids
            .iter()
            .map(|feature_id| entity::room_feature_assignment::ActiveModel {
                room_id: ActiveValue::Set(room_id),
                feature_id: ActiveValue::Set(*feature_id),
                ..Default::default()
            })
            .collect::<Vec<_>>();

        entity::prelude::RoomFeatureAssignment::insert_many(assignments)
            .exec(self.db)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use teamroom_test_utils::prelude::*;

    use crate::data::room::RoomRepository;

    /// Expect set_features to fully replace the previous assignment set
    #[tokio::test]
    async fn set_features_replaces_assignments() -> Result<(), TestError> {
        let test = TestSetup::with_all_tables().await?;
        let room = seed_room(&test.db, "R101").await?;
        let projector = seed_feature(&test.db, "projector").await?;
        let whiteboard = seed_feature(&test.db, "whiteboard").await?;

        let room_repository = RoomRepository::new(&test.db);

        room_repository
            .set_features(room.id, &[projector.id])
            .await?;
        room_repository
            .set_features(room.id, &[whiteboard.id])
            .await?;

        let features = room_repository.features_of(room.id).await?;

        assert_eq!(features.len(), 1);
        assert_eq!(features[0].name, "whiteboard");

        Ok(())
    }
}
