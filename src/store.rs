use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::debug;

use crate::{
    entities::movie,
    error::{StoreError, StoreResult},
    models::{Movie, MovieFields, MovieForm, MovieId},
};

/// Handle to the movie collection. Cloning shares the underlying pool.
#[derive(Clone)]
pub struct MovieStore {
    db: DatabaseConnection,
}

impl MovieStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// All movies in insertion order.
    pub async fn list_all(&self) -> StoreResult<Vec<Movie>> {
        let rows = movie::Entity::find().order_by_asc(movie::Column::Id).all(&self.db).await?;
        Ok(rows.into_iter().map(Movie::from).collect())
    }

    pub async fn get_by_id(&self, raw_id: &str) -> StoreResult<Movie> {
        let id: MovieId = raw_id.parse()?;
        movie::Entity::find_by_id(id.0)
            .one(&self.db)
            .await?
            .map(Movie::from)
            .ok_or(StoreError::NotFound(id))
    }

    pub async fn create(&self, form: MovieForm) -> StoreResult<Movie> {
        let fields = MovieFields::from_form(form)?;
        let row = active_model(fields).insert(&self.db).await?;
        debug!(id = row.id, title = %row.title, "movie created");
        Ok(row.into())
    }

    /// Replaces every field of the movie at `raw_id`. Fields missing from
    /// `form` are cleared, not kept.
    pub async fn update(&self, raw_id: &str, form: MovieForm) -> StoreResult<Movie> {
        let id: MovieId = raw_id.parse()?;
        let fields = MovieFields::from_form(form)?;

        let result = movie::Entity::update_many()
            .set(active_model(fields.clone()))
            .filter(movie::Column::Id.eq(id.0))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(StoreError::NotFound(id));
        }

        debug!(id = id.0, title = %fields.title, "movie updated");
        Ok(Movie { id, fields })
    }

    /// Deletes the movie at `raw_id`. Returns whether a record was removed;
    /// deleting an absent id is not an error.
    pub async fn delete(&self, raw_id: &str) -> StoreResult<bool> {
        let id: MovieId = raw_id.parse()?;
        let result = movie::Entity::delete_by_id(id.0).exec(&self.db).await?;
        let deleted = result.rows_affected > 0;
        debug!(id = id.0, deleted, "movie delete");
        Ok(deleted)
    }

    /// Clears the collection and inserts `seed` in one transaction.
    pub async fn replace_all_with_seed(&self, seed: Vec<MovieFields>) -> StoreResult<Vec<Movie>> {
        for fields in &seed {
            fields.validate()?;
        }

        let txn = self.db.begin().await?;

        let cleared = movie::Entity::delete_many().exec(&txn).await?;

        let mut created = Vec::with_capacity(seed.len());
        for fields in seed {
            let row = active_model(fields).insert(&txn).await?;
            created.push(Movie::from(row));
        }

        txn.commit().await?;

        debug!(cleared = cleared.rows_affected, seeded = created.len(), "movies reseeded");
        Ok(created)
    }
}

fn active_model(fields: MovieFields) -> movie::ActiveModel {
    movie::ActiveModel {
        id: NotSet,
        title: Set(fields.title),
        release_date: Set(fields.release_date),
        length: Set(fields.length),
        genre: Set(fields.genre),
        poster: Set(fields.poster),
        director: Set(fields.director),
        rating: Set(fields.rating),
        watch_again: Set(fields.watch_again),
        cast: Set(fields.cast.into()),
    }
}
