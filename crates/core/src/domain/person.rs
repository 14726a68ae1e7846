use super::{PersonId, Program};

/// Which list a person belongs to. Used for slot headers and synthesized ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Parent,
    Student,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Parent => "parent",
            Role::Student => "student",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParentField {
    Title,
    FullName,
    Phone,
}

impl ParentField {
    /// In column order.
    pub const ALL: [ParentField; 3] = [
        ParentField::Title,
        ParentField::FullName,
        ParentField::Phone,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ParentField::Title => "title",
            ParentField::FullName => "fullName",
            ParentField::Phone => "phone",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StudentField {
    Title,
    FullName,
    Program,
    ClassName,
}

impl StudentField {
    /// In column order.
    pub const ALL: [StudentField; 4] = [
        StudentField::Title,
        StudentField::FullName,
        StudentField::Program,
        StudentField::ClassName,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StudentField::Title => "title",
            StudentField::FullName => "fullName",
            StudentField::Program => "program",
            StudentField::ClassName => "className",
        }
    }
}

/// A parent or guardian. The id only keeps entries apart on the client; it is
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parent {
    pub id: PersonId,
    pub title: String,
    pub full_name: String,
    pub phone: String,
}

impl Parent {
    pub fn blank() -> Self {
        Self {
            id: PersonId::new(),
            title: String::new(),
            full_name: String::new(),
            phone: String::new(),
        }
    }

    pub fn field(&self, field: ParentField) -> &str {
        match field {
            ParentField::Title => self.title.as_str(),
            ParentField::FullName => self.full_name.as_str(),
            ParentField::Phone => self.phone.as_str(),
        }
    }

    pub fn set_field(&mut self, field: ParentField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ParentField::Title => self.title = value,
            ParentField::FullName => self.full_name = value,
            ParentField::Phone => self.phone = value,
        }
    }

    /// Same person, ignoring the client-side id.
    pub fn same_content(&self, other: &Parent) -> bool {
        self.title == other.title
            && self.full_name == other.full_name
            && self.phone == other.phone
    }
}

/// A student. `program` stays `None` until one is selected; `class_name` must
/// come from the selected program's class list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: PersonId,
    pub title: String,
    pub full_name: String,
    program: Option<Program>,
    pub class_name: String,
}

impl Student {
    pub fn blank() -> Self {
        Self {
            id: PersonId::new(),
            title: String::new(),
            full_name: String::new(),
            program: None,
            class_name: String::new(),
        }
    }

    pub fn new(
        id: PersonId,
        title: impl Into<String>,
        full_name: impl Into<String>,
        program: Option<Program>,
        class_name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            full_name: full_name.into(),
            program,
            class_name: class_name.into(),
        }
    }

    pub fn program(&self) -> Option<Program> {
        self.program
    }

    /// Program and class are a dependent pair: choosing a program always
    /// clears the class, even when the same program is chosen again.
    pub fn select_program(&mut self, program: Option<Program>) {
        self.program = program;
        self.class_name.clear();
    }

    pub fn has_valid_class(&self) -> bool {
        self.program
            .is_some_and(|program| program.offers_class(&self.class_name))
    }

    pub fn same_content(&self, other: &Student) -> bool {
        self.title == other.title
            && self.full_name == other.full_name
            && self.program == other.program
            && self.class_name == other.class_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selecting_a_program_clears_the_class() {
        let mut student = Student::blank();
        student.select_program(Some(Program::Kindergarten));
        student.class_name = "อนุบาล 1A TP / Kindergarten 1A TP".to_string();
        assert!(student.has_valid_class());

        student.select_program(Some(Program::ThaiProgramme));

        assert_eq!(student.program(), Some(Program::ThaiProgramme));
        assert!(student.class_name.is_empty());
        assert!(!student.has_valid_class());
    }

    #[test]
    fn class_from_another_program_is_not_valid() {
        let student = Student::new(
            PersonId::new(),
            "Master",
            "Jane Doe",
            Some(Program::EnglishProgramme),
            "ป.1A TP / P.1A TP",
        );

        assert!(!student.has_valid_class());
    }

    #[test]
    fn parent_fields_are_addressable() {
        let mut parent = Parent::blank();
        parent.set_field(ParentField::Phone, "0800000000");

        assert_eq!(parent.field(ParentField::Phone), "0800000000");
        assert_eq!(parent.field(ParentField::FullName), "");
    }
}
