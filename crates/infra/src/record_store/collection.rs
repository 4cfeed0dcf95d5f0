use adegamax_core::{DomainError, DomainResult, Record, RecordId};

/// Ordered in-memory collection that assigns ids on create.
///
/// Insertion order is preserved: updates edit in place, deletes remove
/// without reordering the rest. Ids come from a counter that only moves
/// forward, so a deleted id is never handed out again.
#[derive(Debug, Clone)]
pub struct Collection<T: Record> {
    items: Vec<T>,
    /// `None` once `RecordId` has run out of values.
    next_id: Option<RecordId>,
}

impl<T: Record> Collection<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: Some(RecordId::new(1)),
        }
    }

    /// Rebuild from previously persisted records; the counter resumes after
    /// the highest id present.
    pub fn from_records(items: Vec<T>) -> Self {
        let next_id = match items.iter().map(|item| *item.id()).max() {
            Some(max) => max.checked_next(),
            None => Some(RecordId::new(1)),
        };
        if next_id.is_none() {
            tracing::warn!(entity = T::KIND, "id space exhausted; creates will be rejected");
        }
        Self { items, next_id }
    }

    pub fn create(&mut self, fields: T::Fields) -> DomainResult<&T> {
        let id = self
            .next_id
            .ok_or_else(|| DomainError::ids_exhausted(T::KIND))?;
        self.next_id = id.checked_next();
        self.items.push(T::from_fields(id, fields));
        Ok(&self.items[self.items.len() - 1])
    }

    pub fn update(&mut self, id: RecordId, fields: T::Fields) -> DomainResult<&T> {
        let item = self
            .items
            .iter_mut()
            .find(|item| *item.id() == id)
            .ok_or_else(|| DomainError::not_found(T::KIND, id))?;
        item.apply_fields(fields);
        Ok(&*item)
    }

    pub fn delete(&mut self, id: RecordId) -> DomainResult<T> {
        let pos = self
            .items
            .iter()
            .position(|item| *item.id() == id)
            .ok_or_else(|| DomainError::not_found(T::KIND, id))?;
        Ok(self.items.remove(pos))
    }

    pub fn get(&self, id: RecordId) -> Option<&T> {
        self.items.iter().find(|item| *item.id() == id)
    }

    pub fn list(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Record> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}
