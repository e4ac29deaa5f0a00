//! In-process student storage with the same guarantees as the `students` table:
//! sequential ids from 1, unique email, storage-assigned `created_at`.

use crate::error::AppError;
use crate::model::{NewStudent, Student};
use crate::session::{SessionProvider, StudentSession, DUPLICATE_EMAIL};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Default)]
struct Table {
    rows: BTreeMap<i32, Student>,
    last_id: i32,
}

#[derive(Default)]
struct Shared {
    table: Mutex<Table>,
    closed: AtomicBool,
    open_sessions: AtomicUsize,
}

impl Shared {
    // The lock is never held across an await, and a panicking holder cannot
    // leave a half-written row, so a poisoned table is still consistent.
    fn lock(&self) -> MutexGuard<'_, Table> {
        self.table.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[derive(Clone, Default)]
pub struct MemorySessionProvider {
    shared: Arc<Shared>,
}

impl MemorySessionProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse new sessions from now on, like a closed pool.
    pub fn close(&self) {
        self.shared.closed.store(true, Ordering::SeqCst);
    }

    /// Sessions handed out and not yet dropped.
    pub fn open_sessions(&self) -> usize {
        self.shared.open_sessions.load(Ordering::SeqCst)
    }

    fn check_open(&self) -> Result<(), AppError> {
        if self.shared.closed.load(Ordering::SeqCst) {
            return Err(AppError::Db(sqlx::Error::PoolClosed));
        }
        Ok(())
    }
}

#[async_trait]
impl SessionProvider for MemorySessionProvider {
    async fn acquire(&self) -> Result<Box<dyn StudentSession>, AppError> {
        self.check_open()?;
        self.shared.open_sessions.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(MemorySession {
            shared: Arc::clone(&self.shared),
        }))
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check_open()
    }
}

pub struct MemorySession {
    shared: Arc<Shared>,
}

impl Drop for MemorySession {
    fn drop(&mut self) {
        self.shared.open_sessions.fetch_sub(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl StudentSession for MemorySession {
    async fn list(&mut self) -> Result<Vec<Student>, AppError> {
        Ok(self.shared.lock().rows.values().cloned().collect())
    }

    async fn find(&mut self, id: i32) -> Result<Option<Student>, AppError> {
        Ok(self.shared.lock().rows.get(&id).cloned())
    }

    async fn insert(&mut self, new: NewStudent) -> Result<Student, AppError> {
        let mut table = self.shared.lock();
        if table.rows.values().any(|s| s.email == new.email) {
            return Err(AppError::Conflict(DUPLICATE_EMAIL.into()));
        }
        table.last_id += 1;
        let student = Student {
            id: table.last_id,
            name: new.name,
            email: new.email,
            age: new.age,
            created_at: Utc::now(),
        };
        table.rows.insert(student.id, student.clone());
        Ok(student)
    }

    async fn delete(&mut self, id: i32) -> Result<bool, AppError> {
        Ok(self.shared.lock().rows.remove(&id).is_some())
    }
}
