/// Trait for types that can detect collisions between `self` and an object of type `T`.
/// Shapes that merely touch along an edge or in a corner do not collide.
pub trait CollidesWith<T> {
    fn collides_with(&self, other: &T) -> bool;
}

/// Trait for types that can detect 'almost-collisions' between `self` and an object of type `T`.
///
/// Useful in situations where floating point precision is a concern: two shapes that overlap by
/// less than the tolerance of [`FPA`](crate::util::FPA) are not reported.
pub trait AlmostCollidesWith<T> {
    fn almost_collides_with(&self, other: &T) -> bool;
}
