use std::collections::VecDeque;

use super::types::{Direction, Point};

#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Point>,
    direction: Direction,
}

impl Snake {
    pub fn new(origin: Point, length: usize, direction: Direction) -> Self {
        // All starting segments sit on the origin and unstack over the
        // first ticks as the head pulls away.
        let body = std::iter::repeat(origin).take(length).collect();
        Self { body, direction }
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("snake body is never empty")
    }

    pub fn segments(&self) -> &VecDeque<Point> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    // Reversing into the neck is rejected; anything else takes effect
    // immediately, so the last accepted request before a tick wins.
    pub fn set_direction(&mut self, requested: Direction) {
        if !requested.is_opposite(&self.direction) {
            self.direction = requested;
        }
    }

    /// Pushes a new head one grid unit along the current direction. The
    /// tail stays in place until [`Snake::retract`], so skipping the retract
    /// grows the snake by one.
    pub fn advance(&mut self, unit: i32) -> Point {
        let (dx, dy) = self.direction.delta(unit);
        let head = self.head();
        let new_head = Point::new(head.x + dx, head.y + dy);
        self.body.push_front(new_head);
        new_head
    }

    pub fn retract(&mut self) {
        self.body.pop_back().expect("snake body is never empty");
    }

    pub fn hits_itself(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }
}
