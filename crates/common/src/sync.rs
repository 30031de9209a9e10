/// Reference-counted pointer used throughout the compiler. Single-threaded
/// per compilation unit, so a plain [Rc][std::rc::Rc] suffices.
pub type Lrc<T> = std::rc::Rc<T>;
