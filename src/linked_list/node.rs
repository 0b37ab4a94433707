/// A singly linked cell. Owned by exactly one list, never shared.
#[derive(Debug)]
pub struct Node<T> {
    pub value: T,
    pub next: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    pub fn new(value: T) -> Self {
        Node { value, next: None }
    }

    pub fn with_next(value: T, next: Option<Box<Node<T>>>) -> Self {
        Node { value, next }
    }
}
