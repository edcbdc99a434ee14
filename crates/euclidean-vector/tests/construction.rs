//! Integration tests for building, copying, moving and converting vectors.

use std::collections::LinkedList;

use euclidean_vector::EuclideanVector;

// ---------------------------------------------------------------------------
// Constructors
// ---------------------------------------------------------------------------

#[test]
fn default_is_single_zero() {
    let a = EuclideanVector::default();
    assert_eq!(a.dimensions(), 1);
    assert_eq!(a.at(0).unwrap(), 0.0);
    assert_eq!(EuclideanVector::new().as_slice(), a.as_slice());
}

#[test]
fn zeros_has_requested_dimension() {
    for n in [0usize, 1, 3, 17] {
        let a = EuclideanVector::zeros(n);
        assert_eq!(a.dimensions(), n);
        assert!(a.iter().all(|&v| v == 0.0));
    }
}

#[test]
fn from_elem_fills_every_component() {
    let a = EuclideanVector::from_elem(2, 9.8);
    assert_eq!(a.dimensions(), 2);
    assert_eq!(a[0], 9.8);
    assert_eq!(a[1], 9.8);

    let empty = EuclideanVector::from_elem(0, 5.0);
    assert_eq!(empty.dimensions(), 0);
    assert!(empty.is_empty());

    assert_eq!(EuclideanVector::from_elem(999, 99.0).dimensions(), 999);
}

#[test]
fn from_slice_copies_in_order() {
    let source = vec![1.0, 2.0, 4.5, 7.6];
    let a = EuclideanVector::from_slice(&source);
    assert_eq!(a.dimensions(), 4);
    for (i, v) in source.iter().enumerate() {
        assert_eq!(a[i], *v);
    }

    let empty: Vec<f64> = vec![];
    assert_eq!(EuclideanVector::from_slice(&empty).dimensions(), 0);
}

#[test]
fn collect_from_iterators() {
    let source = [1.0, 2.0, 3.0];
    let by_ref: EuclideanVector = source.iter().collect();
    let by_value: EuclideanVector = source.iter().map(|v| v * 2.0).collect();
    assert_eq!(by_ref.as_slice(), &[1.0, 2.0, 3.0]);
    assert_eq!(by_value.as_slice(), &[2.0, 4.0, 6.0]);

    let empty: EuclideanVector = std::iter::empty::<f64>().collect();
    assert_eq!(empty.dimensions(), 0);
}

#[test]
fn from_literal_array() {
    let a = EuclideanVector::from([1.0, 2.0, 5.3, 7.6]);
    assert_eq!(a.dimensions(), 4);
    assert_eq!(a[0], 1.0);
    assert_eq!(a[1], 2.0);
    assert_eq!(a[2], 5.3);
    assert_eq!(a[3], 7.6);

    let empty = EuclideanVector::from([0.0f64; 0]);
    assert_eq!(empty.dimensions(), 0);
}

// ---------------------------------------------------------------------------
// Copy and move
// ---------------------------------------------------------------------------

#[test]
fn clone_is_deep() {
    let a = EuclideanVector::from([1.0, 2.0, 5.3, 7.6]);
    let mut b = a.clone();
    assert_eq!(b.dimensions(), 4);
    assert_ne!(a.as_slice().as_ptr(), b.as_slice().as_ptr());
    assert_eq!(a, b);

    b[0] = 100.0;
    assert_eq!(a[0], 1.0);
    assert_ne!(a, b);
}

#[test]
fn move_keeps_buffer() {
    let a = EuclideanVector::from([1.0, 2.0, 5.3, 7.6]);
    let buffer = a.as_slice().as_ptr();
    let b = a;
    assert_eq!(b.as_slice().as_ptr(), buffer);
    assert_eq!(b, EuclideanVector::from([1.0, 2.0, 5.3, 7.6]));
}

#[test]
fn take_assignment_resets_source() {
    let mut a = EuclideanVector::from([1.0, 3.0, -2.0, -9.5]);
    let mut b = EuclideanVector::new();
    assert_eq!(b.dimensions(), 1);
    let buffer = a.as_slice().as_ptr();

    b = a.take();
    assert_eq!(b.as_slice().as_ptr(), buffer);
    assert_eq!(b, EuclideanVector::from([1.0, 3.0, -2.0, -9.5]));
    assert_eq!(a.dimensions(), 0);

    // the emptied source is still a working vector
    a = EuclideanVector::from([4.0]);
    assert_eq!(a.dimensions(), 1);
}

#[test]
fn clone_from_copies_into_new_buffer() {
    let a = EuclideanVector::from([1.0, 3.0, -2.0, -9.5]);
    let mut b = EuclideanVector::new();
    b.clone_from(&a);
    assert_ne!(a.as_slice().as_ptr(), b.as_slice().as_ptr());
    assert_eq!(a, b);
}

// ---------------------------------------------------------------------------
// Element access
// ---------------------------------------------------------------------------

#[test]
fn index_reads_and_writes() {
    let mut a = EuclideanVector::from([1.0, 3.0, -2.0, -9.5]);
    assert_eq!(a[0], 1.0);
    assert_eq!(a[3], -9.5);
    a[0] = 9999.0;
    assert_eq!(a[0], 9999.0);
    assert_eq!(a, EuclideanVector::from([9999.0, 3.0, -2.0, -9.5]));
}

#[test]
#[should_panic(expected = "index")]
fn index_past_end_panics() {
    let a = EuclideanVector::zeros(2);
    let _ = a[2];
}

#[test]
fn at_reads_in_range() {
    let a = EuclideanVector::from([1.0, 2.5, 3.0]);
    assert_eq!(a.at(0).unwrap(), 1.0);
    assert_eq!(a.at(1).unwrap(), 2.5);
    assert_eq!(a.at(2).unwrap(), 3.0);
}

#[test]
fn at_mut_writes_in_range() {
    let mut a = EuclideanVector::from([1.0, 2.5, 3.0]);
    *a.at_mut(2).unwrap() = -99.0;
    assert_eq!(a.at(2).unwrap(), -99.0);
    assert_eq!(a, EuclideanVector::from([1.0, 2.5, -99.0]));
}

#[test]
fn at_rejects_invalid_indices() {
    let message = "Index X is not valid for this euclidean_vector object";
    let mut a = EuclideanVector::from([1.0, 2.5, 3.0]);

    for index in [-1isize, 3, 5] {
        assert_eq!(a.at(index).unwrap_err().to_string(), message);
        assert_eq!(a.at_mut(index).unwrap_err().to_string(), message);
    }
    assert_eq!(a, EuclideanVector::from([1.0, 2.5, 3.0]));
}

#[test]
fn at_on_empty_vector_always_fails() {
    let a = EuclideanVector::zeros(0);
    assert!(a.at(0).is_err());
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

#[test]
fn into_std_vec() {
    let a = EuclideanVector::from([3.3, -6.6, 9.9]);
    let values: Vec<f64> = Vec::from(&a);
    assert_eq!(values, vec![3.3, -6.6, 9.9]);
    assert_ne!(values.as_ptr(), a.as_slice().as_ptr());

    let owned: Vec<f64> = a.into();
    assert_eq!(owned.len(), 3);
}

#[test]
fn into_linked_list() {
    let a = EuclideanVector::from([3.3, -6.6, 9.9]);
    let list: LinkedList<f64> = LinkedList::from(&a);
    assert_eq!(list.len(), 3);

    let mut iter = list.iter();
    assert_eq!(iter.next(), Some(&3.3));
    assert_eq!(iter.next(), Some(&-6.6));
    assert_eq!(iter.next(), Some(&9.9));
    assert_eq!(iter.next(), None);

    let empty: LinkedList<f64> = EuclideanVector::zeros(0).into();
    assert!(empty.is_empty());
}
