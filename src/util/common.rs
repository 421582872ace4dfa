use std::rc::Rc;

pub type Array<T> = Rc<[Rc<T>]>;
