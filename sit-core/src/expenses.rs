//! The daily expenses page: day buckets of expenses, optional day notes
//! and the weekly spending chart.

use anyhow::{Result, bail};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::calendar::date_key;
use crate::config::Config;
use crate::paths::{EXPENSES_KEY, durable_path, mirror_path};
use crate::stats::{self, WeekStats};
use crate::store::{Committed, RecordStore, StoreError};

/// A single expense within a day bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    /// Amount as typed (`"12.50"`). Only values parsing above zero get persisted.
    pub amount: String,
    #[serde(default)]
    pub description: String,
}

impl Expense {
    /// Numeric value of the amount. Anything unparsable counts as zero.
    pub fn amount_value(&self) -> f64 {
        self.amount.trim().parse().unwrap_or(0.0)
    }
}

/// Everything recorded for one day: the expense list plus optional free text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayExpenses {
    pub expenses: Vec<Expense>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl DayExpenses {
    pub fn total(&self) -> f64 {
        self.expenses.iter().map(Expense::amount_value).sum()
    }
}

/// The expenses page controller, owning the `expenses_data` store.
#[derive(Debug)]
pub struct Expenses {
    store: RecordStore<BTreeMap<String, DayExpenses>>,
}

impl Expenses {
    /// Opens the expenses store. A load problem is returned as a warning,
    /// never an error; the page starts empty in that case.
    pub fn open(config: &Config) -> (Self, Option<StoreError>) {
        let (store, warning) = RecordStore::open(
            durable_path(&config.data_dir, EXPENSES_KEY),
            mirror_path(&config.session_dir, EXPENSES_KEY),
        );
        (Self { store }, warning)
    }

    pub fn day(&self, date: NaiveDate) -> Option<&DayExpenses> {
        self.store.get(&date_key(date))
    }

    /// Replaces the whole day with `draft`, keeping only expenses whose
    /// amount parses above zero.
    ///
    /// When no expense survives the filter the save is rejected and the
    /// store is left untouched.
    pub fn save_day(&mut self, date: NaiveDate, draft: DayExpenses) -> Result<Committed<DayExpenses>> {
        let expenses: Vec<Expense> = draft
            .expenses
            .into_iter()
            .filter(|expense| expense.amount_value() > 0.0)
            .collect();
        if expenses.is_empty() {
            bail!("no expense has a valid amount; nothing was saved");
        }
        let record = DayExpenses {
            expenses,
            notes: draft.notes.filter(|notes| !notes.trim().is_empty()),
        };
        let committed = self.store.put(date_key(date), record.clone());
        Ok(Committed {
            value: record,
            warning: committed.warning,
        })
    }

    /// Appends one expense to the day, creating the day bucket if needed.
    /// `notes`, when given, replaces the day's free text.
    pub fn add_expense(
        &mut self,
        date: NaiveDate,
        amount: &str,
        description: &str,
        notes: Option<&str>,
    ) -> Result<Committed<Expense>> {
        let amount = amount.trim();
        if !amount.parse::<f64>().is_ok_and(|value| value > 0.0) {
            bail!("'{amount}' is not a positive amount");
        }
        let expense = Expense {
            id: Uuid::new_v4().to_string(),
            amount: amount.to_string(),
            description: description.trim().to_string(),
        };
        let key = date_key(date);
        let stored = expense.clone();
        let notes = notes.map(str::to_string);
        let committed = self.store.commit(move |data| {
            let day = data.entry(key).or_default();
            day.expenses.push(stored);
            if let Some(notes) = notes {
                day.notes = Some(notes);
            }
        });
        Ok(Committed {
            value: expense,
            warning: committed.warning,
        })
    }

    /// Removes the expense matching the id prefix from the day. A day left
    /// without expenses disappears entirely.
    pub fn remove_expense(&mut self, date: NaiveDate, id: &str) -> Result<Committed<Expense>> {
        let key = date_key(date);
        let index = match self.store.get(&key) {
            Some(day) => position_of(&day.expenses, id)?,
            None => bail!("no expenses recorded on {key}"),
        };
        let committed = self.store.commit(|data| {
            let removed = data.get_mut(&key).map(|day| day.expenses.remove(index));
            if data.get(&key).is_some_and(|day| day.expenses.is_empty()) {
                data.remove(&key);
            }
            removed
        });
        match committed.value {
            Some(expense) => Ok(Committed {
                value: expense,
                warning: committed.warning,
            }),
            None => bail!("no expenses recorded on {key}"),
        }
    }

    /// The spending chart for the week containing `reference`.
    pub fn week_stats(&self, reference: NaiveDate) -> WeekStats {
        stats::expense_week(self.store.data(), reference)
    }
}

fn position_of(expenses: &[Expense], id: &str) -> Result<usize> {
    let matches: Vec<usize> = expenses
        .iter()
        .enumerate()
        .filter(|(_, expense)| expense.id.starts_with(id))
        .map(|(index, _)| index)
        .collect();
    match matches.as_slice() {
        [] => bail!("no expense matches id '{id}'"),
        [index] => Ok(*index),
        _ => bail!("expense id '{id}' is ambiguous ({} matches)", matches.len()),
    }
}
