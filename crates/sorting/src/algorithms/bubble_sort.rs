pub fn sort<T: Ord>(data: &mut [T]) {
    let len = data.len();

    // First pass is unconditional; keep going while a pass swapped.
    loop {
        let mut swapped = false;
        for i in 1..len {
            if data[i - 1] > data[i] {
                data.swap(i - 1, i);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}
