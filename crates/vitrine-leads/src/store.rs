//! Persistence operations for contact submissions.
//!
//! All writes go through [`create_submission`], a single INSERT that returns
//! the assigned row ID and timestamp. Reads go through [`list_submissions`],
//! which returns every stored submission in chronological order for the
//! admin listing. Submissions are never updated or deleted.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use vitrine_types::{ContactSubmission, NewContactSubmission};

use crate::error::LeadError;

fn parse_created_at(raw: &str) -> Result<DateTime<Utc>, LeadError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|source| LeadError::Timestamp {
            raw: raw.to_string(),
            source,
        })
}

/// Writes a single contact submission.
///
/// The row ID and `created_at` timestamp are assigned by the database and
/// returned via INSERT…RETURNING in a single statement.
///
/// # Errors
///
/// Returns `LeadError::Database` on SQL failure.
pub fn create_submission(
    conn: &Connection,
    new: &NewContactSubmission,
) -> Result<ContactSubmission, LeadError> {
    let (id, created_at_raw) = conn.query_row(
        "INSERT INTO contact_submissions (name, email, service, budget, timeline, message)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)
         RETURNING id, created_at",
        params![
            new.name,
            new.email,
            new.service,
            new.budget,
            new.timeline,
            new.message,
        ],
        |row| Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?)),
    )?;

    Ok(ContactSubmission {
        id,
        name: new.name.clone(),
        email: new.email.clone(),
        service: new.service.clone(),
        budget: new.budget.clone(),
        timeline: new.timeline.clone(),
        message: new.message.clone(),
        created_at: parse_created_at(&created_at_raw)?,
    })
}

/// Returns every stored submission in chronological order (oldest first).
///
/// Ties on `created_at` (second resolution) are broken by row ID, so the
/// listing order is stable across reads.
///
/// # Errors
///
/// Returns `LeadError::Database` on SQL failure.
pub fn list_submissions(conn: &Connection) -> Result<Vec<ContactSubmission>, LeadError> {
    let mut stmt = conn.prepare(
        "SELECT id, name, email, service, budget, timeline, message, created_at
         FROM contact_submissions
         ORDER BY created_at ASC, id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, i64>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, Option<String>>(3)?,
            row.get::<_, Option<String>>(4)?,
            row.get::<_, Option<String>>(5)?,
            row.get::<_, String>(6)?,
            row.get::<_, String>(7)?,
        ))
    })?;

    let mut submissions = Vec::new();
    for row in rows {
        let (id, name, email, service, budget, timeline, message, created_at_raw) = row?;
        submissions.push(ContactSubmission {
            id,
            name,
            email,
            service,
            budget,
            timeline,
            message,
            created_at: parse_created_at(&created_at_raw)?,
        });
    }

    Ok(submissions)
}
