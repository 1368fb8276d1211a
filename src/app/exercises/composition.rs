use crate::core::{Console, Exercise, ExerciseId, Result};
use crate::domain::ports::Member;
use crate::domain::school::{School, Student, Teacher};

pub struct CompositionExercise {
    student: String,
    teacher: String,
    message: String,
}

impl CompositionExercise {
    pub fn new(student: String, teacher: String, message: String) -> Self {
        Self {
            student,
            teacher,
            message,
        }
    }
}

impl Exercise for CompositionExercise {
    fn id(&self) -> ExerciseId {
        ExerciseId::Composition
    }

    fn run(&self, console: &mut Console<'_>) -> Result<()> {
        let student = Student::new(self.student.as_str());
        let teacher = Teacher::new(self.teacher.as_str());

        let members: [&dyn Member; 2] = [&student, &teacher];
        for member in members {
            console.say(member.show_info())?;
        }
        console.blank()?;

        console.say(student.send_message(None))?;
        console.say(student.send_message(Some(self.message.as_str())))?;
        console.say(teacher.send_message())?;
        console.blank()?;

        let school = School::new(student, teacher);
        console.say(school.school_info())
    }
}
