use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

/// The flat element array behind a matrix.
///
/// A buffer is shared by a matrix and the zero copy transposes made from it, writes through any
/// of them are visible to all. [`DenseBuffer::deep_copy`] and [`DenseBuffer::detach`] produce an
/// independent buffer. The handle is reference counted and not thread safe.
pub struct DenseBuffer<T> {
  data: Rc<RefCell<Box<[T]>>>,
}

impl<T: Copy> DenseBuffer<T> {
  pub fn filled(len: usize, value: T) -> Self {
    Self::from_boxed(vec![value; len].into_boxed_slice())
  }

  pub fn from_boxed(data: Box<[T]>) -> Self {
    Self {
      data: Rc::new(RefCell::new(data)),
    }
  }

  pub fn len(&self) -> usize {
    self.data.borrow().len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  #[inline]
  pub fn get(&self, index: usize) -> T {
    self.data.borrow()[index]
  }

  #[inline]
  pub fn set(&self, index: usize, value: T) {
    self.data.borrow_mut()[index] = value;
  }

  /// `f` runs with no borrow held, so it may read or write other handles of this buffer.
  #[inline]
  pub fn update(&self, index: usize, f: impl FnOnce(T) -> T) {
    let value = f(self.get(index));
    self.set(index, value);
  }

  pub fn to_vec(&self) -> Vec<T> {
    self.data.borrow().to_vec()
  }

  /// Crate internal: callers must not run foreign code while the guard is alive.
  pub(crate) fn borrow(&self) -> Ref<'_, [T]> {
    Ref::map(self.data.borrow(), |data| &**data)
  }

  pub(crate) fn borrow_mut(&self) -> RefMut<'_, [T]> {
    RefMut::map(self.data.borrow_mut(), |data| &mut **data)
  }

  /// Another handle to the same elements.
  pub fn share(&self) -> Self {
    Self {
      data: self.data.clone(),
    }
  }

  pub fn deep_copy(&self) -> Self {
    Self::from_boxed(self.data.borrow().clone())
  }

  pub fn is_shared(&self) -> bool {
    Rc::strong_count(&self.data) > 1
  }

  pub fn ptr_eq(&self, other: &Self) -> bool {
    Rc::ptr_eq(&self.data, &other.data)
  }

  /// Stop sharing: later writes through this handle are no longer visible to the others.
  pub fn detach(&mut self) {
    if self.is_shared() {
      *self = self.deep_copy();
    }
  }
}

impl<T: fmt::Debug> fmt::Debug for DenseBuffer<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("DenseBuffer")
      .field("data", &self.data.borrow())
      .field("handles", &Rc::strong_count(&self.data))
      .finish()
  }
}

#[test]
fn shared_handles_see_writes() {
  let a = DenseBuffer::filled(4, 0);
  let b = a.share();
  assert!(a.is_shared() && b.ptr_eq(&a));
  b.set(2, 7);
  assert_eq!(a.get(2), 7);
  a.update(2, |v| v * 2);
  assert_eq!(&*b.borrow(), &[0, 0, 14, 0]);
}

#[test]
fn deep_copy_and_detach_sever_sharing() {
  let a = DenseBuffer::filled(3, 1.);
  let copy = a.deep_copy();
  assert!(!copy.ptr_eq(&a));
  copy.set(0, 5.);
  assert_eq!(a.get(0), 1.);

  let mut shared = a.share();
  shared.detach();
  assert!(!shared.ptr_eq(&a));
  assert!(!a.is_shared());
  shared.set(1, 9.);
  assert_eq!(a.get(1), 1.);
}

#[test]
fn update_may_touch_other_handles() {
  let a = DenseBuffer::filled(2, 1);
  let b = a.share();
  a.update(0, |v| {
    b.set(1, 5);
    v + b.get(1)
  });
  assert_eq!(b.to_vec(), vec![6, 5]);
}
