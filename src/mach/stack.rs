/// ## Operand stack
///
/// Unbounded last-in-first-out vector. Underflow is reported by the
/// caller, which knows which operator wanted the value.

pub struct Stack<T> {
    vec: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Stack<T> {
        Stack::new()
    }
}

impl<T> Stack<T> {
    pub fn new() -> Stack<T> {
        Stack { vec: vec![] }
    }
    pub fn clear(&mut self) {
        self.vec.clear()
    }
    pub fn len(&self) -> usize {
        self.vec.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
    pub fn last(&self) -> Option<&T> {
        self.vec.last()
    }
    pub fn get(&self, idx: usize) -> Option<&T> {
        self.vec.get(idx)
    }
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.vec.iter()
    }
    pub fn push(&mut self, val: T) {
        self.vec.push(val)
    }
    pub fn extend<I: IntoIterator<Item = T>>(&mut self, vals: I) {
        self.vec.extend(vals)
    }
    pub fn pop(&mut self) -> Option<T> {
        self.vec.pop()
    }
    /// Removes the top `len` items, oldest first.
    pub fn pop_n(&mut self, len: usize) -> Option<Vec<T>> {
        if len > self.vec.len() {
            None
        } else {
            let range = (self.vec.len() - len)..;
            Some(self.vec.drain(range).collect())
        }
    }
    /// Removes everything, oldest first.
    pub fn drain(&mut self) -> Vec<T> {
        std::mem::take(&mut self.vec)
    }
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.vec.clone()
    }
}
