use crate::domain::ports::Measure;
use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl Measure for Circle {
    fn compute_metric(&self) -> f64 {
        PI * self.radius * self.radius
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Measure for Rectangle {
    fn compute_metric(&self) -> f64 {
        self.width * self.height
    }
}

/// Closed family of shapes. Dimensions are not validated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Rectangle(Rectangle),
}

impl Shape {
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Circle(_) => "Circle",
            Shape::Rectangle(_) => "Rectangle",
        }
    }
}

impl Measure for Shape {
    fn compute_metric(&self) -> f64 {
        match self {
            Shape::Circle(circle) => circle.compute_metric(),
            Shape::Rectangle(rectangle) => rectangle.compute_metric(),
        }
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<Rectangle> for Shape {
    fn from(rectangle: Rectangle) -> Self {
        Shape::Rectangle(rectangle)
    }
}

pub fn circle_area(radius: f64) -> f64 {
    Circle::new(radius).compute_metric()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_metric() {
        let area = Shape::from(Circle::new(5.0)).compute_metric();
        assert!((area - 78.54).abs() < 0.01);
    }

    #[test]
    fn test_rectangle_metric() {
        assert_eq!(Shape::from(Rectangle::new(4.0, 6.0)).compute_metric(), 24.0);
    }

    #[test]
    fn test_negative_dimensions_are_accepted() {
        assert_eq!(Rectangle::new(-4.0, 6.0).compute_metric(), -24.0);
        assert!((circle_area(-5.0) - circle_area(5.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_shape_names() {
        assert_eq!(Shape::from(Circle::new(1.0)).name(), "Circle");
        assert_eq!(Shape::from(Rectangle::new(1.0, 1.0)).name(), "Rectangle");
    }
}
