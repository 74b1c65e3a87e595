//! SQLite connection wrapper for the state database, plus the exclusive
//! session every engine run goes through.

use crate::core::store::WriteOffStore;
use crate::db::log::DbJournal;
use crate::db::queries::{load_day_state, load_store, save_day_state, save_store};
use crate::errors::AppResult;
use crate::models::day_state::DayState;
use rusqlite::{Connection, Result, Transaction, TransactionBehavior};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }

    /// Load the store and day state under an exclusive write lock.
    pub fn session(&mut self) -> AppResult<StateSession<'_>> {
        StateSession::begin(&mut self.conn)
    }
}

/// Load → run → save scope. Holding an IMMEDIATE transaction keeps a
/// second process from running a cycle on the same state concurrently.
pub struct StateSession<'c> {
    tx: Transaction<'c>,
    pub store: WriteOffStore,
    pub day: DayState,
}

impl<'c> StateSession<'c> {
    fn begin(conn: &'c mut Connection) -> AppResult<Self> {
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
        let store = load_store(&tx)?;
        let day = load_day_state(&tx)?;
        Ok(Self { tx, store, day })
    }

    /// Mutable state plus a journal writing into the same transaction.
    pub fn parts(&mut self) -> (&mut WriteOffStore, &mut DayState, DbJournal<'_>) {
        (&mut self.store, &mut self.day, DbJournal::new(&self.tx))
    }

    /// Persist store and day state, then release the lock.
    pub fn save(self) -> AppResult<()> {
        save_store(&self.tx, &self.store)?;
        save_day_state(&self.tx, &self.day)?;
        self.tx.commit()?;
        Ok(())
    }

    /// Keep the journal lines but leave the persisted state untouched.
    pub fn discard(self) -> AppResult<()> {
        self.tx.commit()?;
        Ok(())
    }
}
