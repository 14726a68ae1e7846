//! Fixed-width row layout of the submissions sheet.
//!
//! A row is `id`, three parent slots of three columns, three student slots of
//! four columns, then `attendance` and `submissionDate`: 24 columns in all.
//! Unused slots are padded with empty strings. On the way back a slot counts
//! as present only when its full name is non-empty after trimming; empty
//! slots are skipped, so a gap before a populated slot compacts the list.

use std::collections::HashMap;

use crate::domain::{
    Attendance, Parent, ParentField, PersonId, Program, Role, Student, StudentField, Submission,
    SubmissionId,
};

/// Positional slot of a parent or student group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Slot {
    First,
    Second,
    Third,
}

impl Slot {
    pub const ALL: [Slot; 3] = [Slot::First, Slot::Second, Slot::Third];

    /// 0-based position, i.e. the index into `parents` / `students`.
    pub const fn index(self) -> usize {
        match self {
            Slot::First => 0,
            Slot::Second => 1,
            Slot::Third => 2,
        }
    }

    /// 1-based number used in headers and synthesized ids.
    pub const fn number(self) -> usize {
        self.index() + 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SheetColumn {
    Id,
    Parent(Slot, ParentField),
    Student(Slot, StudentField),
    Attendance,
    SubmissionDate,
}

const PARENT_WIDTH: usize = ParentField::ALL.len();
const STUDENT_WIDTH: usize = StudentField::ALL.len();
const PARENT_BASE: usize = 1;
const STUDENT_BASE: usize = PARENT_BASE + Slot::ALL.len() * PARENT_WIDTH;
const TRAILER_BASE: usize = STUDENT_BASE + Slot::ALL.len() * STUDENT_WIDTH;

pub const COLUMN_COUNT: usize = TRAILER_BASE + 2;

/// Header row of the sheet, in column order.
pub const HEADERS: [&str; COLUMN_COUNT] = [
    "id",
    "parent1_title",
    "parent1_fullName",
    "parent1_phone",
    "parent2_title",
    "parent2_fullName",
    "parent2_phone",
    "parent3_title",
    "parent3_fullName",
    "parent3_phone",
    "student1_title",
    "student1_fullName",
    "student1_program",
    "student1_className",
    "student2_title",
    "student2_fullName",
    "student2_program",
    "student2_className",
    "student3_title",
    "student3_fullName",
    "student3_program",
    "student3_className",
    "attendance",
    "submissionDate",
];

const fn parent_offset(field: ParentField) -> usize {
    match field {
        ParentField::Title => 0,
        ParentField::FullName => 1,
        ParentField::Phone => 2,
    }
}

const fn student_offset(field: StudentField) -> usize {
    match field {
        StudentField::Title => 0,
        StudentField::FullName => 1,
        StudentField::Program => 2,
        StudentField::ClassName => 3,
    }
}

impl SheetColumn {
    pub const fn index(self) -> usize {
        match self {
            SheetColumn::Id => 0,
            SheetColumn::Parent(slot, field) => {
                PARENT_BASE + slot.index() * PARENT_WIDTH + parent_offset(field)
            }
            SheetColumn::Student(slot, field) => {
                STUDENT_BASE + slot.index() * STUDENT_WIDTH + student_offset(field)
            }
            SheetColumn::Attendance => TRAILER_BASE,
            SheetColumn::SubmissionDate => TRAILER_BASE + 1,
        }
    }

    pub const fn header(self) -> &'static str {
        HEADERS[self.index()]
    }

    /// Every column, in sheet order.
    pub fn all() -> impl Iterator<Item = SheetColumn> {
        let parents = Slot::ALL.into_iter().flat_map(|slot| {
            ParentField::ALL
                .into_iter()
                .map(move |field| SheetColumn::Parent(slot, field))
        });
        let students = Slot::ALL.into_iter().flat_map(|slot| {
            StudentField::ALL
                .into_iter()
                .map(move |field| SheetColumn::Student(slot, field))
        });

        std::iter::once(SheetColumn::Id)
            .chain(parents)
            .chain(students)
            .chain([SheetColumn::Attendance, SheetColumn::SubmissionDate])
    }

    pub fn from_header(header: &str) -> Option<SheetColumn> {
        let header = header.trim();
        SheetColumn::all().find(|column| column.header() == header)
    }
}

const _: () =
    assert!(SheetColumn::Parent(Slot::Third, ParentField::Phone).index() + 1 == STUDENT_BASE);
const _: () = assert!(SheetColumn::SubmissionDate.index() == COLUMN_COUNT - 1);

/// One flat row of the sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRow([String; COLUMN_COUNT]);

impl Default for SheetRow {
    fn default() -> Self {
        Self(std::array::from_fn(|_| String::new()))
    }
}

impl SheetRow {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a row from positional cells. Missing trailing cells read as
    /// empty; cells past the last column are ignored.
    pub fn from_cells<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut row = Self::empty();
        for (slot, cell) in row.0.iter_mut().zip(cells) {
            *slot = cell.into();
        }
        row
    }

    /// Build a row from a header-name → value mapping. Header names are
    /// trimmed; unknown headers are ignored and absent ones read as empty.
    pub fn from_header_map<K, V>(values: &HashMap<K, V>) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut row = Self::empty();
        for (header, value) in values {
            if let Some(column) = SheetColumn::from_header(header.as_ref()) {
                row.set(column, value.as_ref());
            }
        }
        row
    }

    pub fn get(&self, column: SheetColumn) -> &str {
        &self.0[column.index()]
    }

    pub fn set(&mut self, column: SheetColumn, value: impl Into<String>) {
        self.0[column.index()] = value.into();
    }

    pub fn id(&self) -> &str {
        self.get(SheetColumn::Id)
    }

    pub fn cells(&self) -> &[String] {
        &self.0
    }

    pub fn into_cells(self) -> Vec<String> {
        self.0.into()
    }

    pub fn to_header_map(&self) -> HashMap<&'static str, &str> {
        HEADERS
            .iter()
            .copied()
            .zip(self.0.iter().map(String::as_str))
            .collect()
    }
}

/// The sole presence rule for a slot.
pub fn is_slot_present(full_name: &str) -> bool {
    !full_name.trim().is_empty()
}

fn student_cell(student: &Student, field: StudentField) -> &str {
    match field {
        StudentField::Title => student.title.as_str(),
        StudentField::FullName => student.full_name.as_str(),
        StudentField::Program => student.program().map(Program::key).unwrap_or_default(),
        StudentField::ClassName => student.class_name.as_str(),
    }
}

/// Write path: nested submission to positional row. Slot `i` holds
/// `parents[i]` / `students[i]`; slots past the end of a list stay empty.
pub fn flatten(submission: &Submission) -> SheetRow {
    let mut row = SheetRow::empty();
    row.set(SheetColumn::Id, submission.id().as_str());

    for (slot, parent) in Slot::ALL.into_iter().zip(submission.parents()) {
        for field in ParentField::ALL {
            row.set(SheetColumn::Parent(slot, field), parent.field(field));
        }
    }

    for (slot, student) in Slot::ALL.into_iter().zip(submission.students()) {
        for field in StudentField::ALL {
            row.set(
                SheetColumn::Student(slot, field),
                student_cell(student, field),
            );
        }
    }

    row.set(SheetColumn::Attendance, submission.attendance().as_str());
    row.set(SheetColumn::SubmissionDate, submission.submission_date());
    row
}

/// Read path: positional row back to a nested submission. Person ids are
/// synthesized from role, slot number and row id since rows do not store
/// them.
pub fn reconstruct(row: &SheetRow) -> Submission {
    let id = SubmissionId::from_raw(row.id());

    let parents = Slot::ALL
        .into_iter()
        .filter(|&slot| is_slot_present(row.get(SheetColumn::Parent(slot, ParentField::FullName))))
        .map(|slot| Parent {
            id: PersonId::synthesized(Role::Parent, slot.number(), &id),
            title: row.get(SheetColumn::Parent(slot, ParentField::Title)).to_string(),
            full_name: row
                .get(SheetColumn::Parent(slot, ParentField::FullName))
                .to_string(),
            phone: row.get(SheetColumn::Parent(slot, ParentField::Phone)).to_string(),
        })
        .collect();

    let students = Slot::ALL
        .into_iter()
        .filter(|&slot| {
            is_slot_present(row.get(SheetColumn::Student(slot, StudentField::FullName)))
        })
        .map(|slot| {
            Student::new(
                PersonId::synthesized(Role::Student, slot.number(), &id),
                row.get(SheetColumn::Student(slot, StudentField::Title)),
                row.get(SheetColumn::Student(slot, StudentField::FullName)),
                row.get(SheetColumn::Student(slot, StudentField::Program))
                    .trim()
                    .parse()
                    .ok(),
                row.get(SheetColumn::Student(slot, StudentField::ClassName)),
            )
        })
        .collect();

    Submission::from_stored(
        id,
        parents,
        students,
        Attendance::from_stored(row.get(SheetColumn::Attendance)),
        row.get(SheetColumn::SubmissionDate),
    )
}
