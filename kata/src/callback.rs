/// Call `callback` with each element and its index, in index order.
pub fn each<T, F>(elements: &[T], mut callback: F)
where
    F: FnMut(&T, usize),
{
    for (index, element) in elements.iter().enumerate() {
        callback(element, index);
    }
}

/// Produce a new vector by passing each element through `callback`.
pub fn map<T, U, F>(elements: &[T], mut callback: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    let mut result = Vec::with_capacity(elements.len());
    each(elements, |element, _| result.push(callback(element)));
    result
}
