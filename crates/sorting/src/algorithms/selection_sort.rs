pub fn sort<T: Ord>(data: &mut [T]) {
    let len = data.len();

    for min_index in 0..len {
        let mut lowest = min_index;
        for i in min_index..len {
            // Strict `<` keeps the first minimum found.
            if data[i] < data[lowest] {
                lowest = i;
            }
        }
        data.swap(min_index, lowest);
    }
}
