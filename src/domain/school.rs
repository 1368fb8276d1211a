use crate::domain::ports::Member;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    name: String,
}

impl Student {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn send_message(&self, message: Option<&str>) -> String {
        match message {
            Some(text) => format!("Message sent to teacher: {}", text),
            None => "Message sent to teacher.".to_string(),
        }
    }
}

impl Member for Student {
    fn name(&self) -> &str {
        &self.name
    }

    fn show_info(&self) -> String {
        format!("I am {}, a student.", self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Teacher {
    name: String,
}

impl Teacher {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn send_message(&self) -> String {
        "Message sent to student.".to_string()
    }
}

impl Member for Teacher {
    fn name(&self) -> &str {
        &self.name
    }

    fn show_info(&self) -> String {
        format!("I am {}, a teacher.", self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct School {
    student: Student,
    teacher: Teacher,
}

impl School {
    pub fn new(student: Student, teacher: Teacher) -> Self {
        Self { student, teacher }
    }

    pub fn school_info(&self) -> String {
        format!(
            "School has: {} and {}",
            self.student.name(),
            self.teacher.name()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Visitor(&'static str);

    impl Member for Visitor {
        fn name(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn test_show_info_is_overridden_per_member() {
        let members: [&dyn Member; 3] = [
            &Student::new("Francis"),
            &Teacher::new("Mr. Cruz"),
            &Visitor("Ana"),
        ];
        let lines: Vec<String> = members.iter().map(|m| m.show_info()).collect();
        assert_eq!(
            lines,
            vec![
                "I am Francis, a student.",
                "I am Mr. Cruz, a teacher.",
                "I am Ana",
            ]
        );
    }

    #[test]
    fn test_messages() {
        let student = Student::new("Francis");
        assert_eq!(student.send_message(None), "Message sent to teacher.");
        assert_eq!(
            student.send_message(Some("Can I submit my project tomorrow?")),
            "Message sent to teacher: Can I submit my project tomorrow?"
        );
        assert_eq!(Teacher::new("Mr. Cruz").send_message(), "Message sent to student.");
    }

    #[test]
    fn test_school_info() {
        let school = School::new(Student::new("Francis"), Teacher::new("Mr. Cruz"));
        assert_eq!(school.school_info(), "School has: Francis and Mr. Cruz");
    }
}
