use crate::domain::ports::Speak;

#[derive(Debug, Clone, Copy, Default)]
pub struct Bird;

impl Speak for Bird {
    fn speak(&self) -> &'static str {
        "Tweet!"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Robot;

impl Speak for Robot {
    fn speak(&self) -> &'static str {
        "Beep boop!"
    }
}

pub fn make_it_speak(speaker: &dyn Speak) -> &'static str {
    speaker.speak()
}
