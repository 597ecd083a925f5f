use std::any::{type_name, Any, TypeId};
use std::collections::{BTreeMap, HashMap};
use std::marker::PhantomData;

/// Typed handle to a blackboard slot.
///
/// Indices are dense and scoped per value type: `BbKey<f32>` index 0 and `BbKey<bool>` index 0
/// are unrelated slots. Keys are obtained from [`Blackboard::register`] and stay valid for the
/// lifetime of the blackboard that issued them.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BbKey<T: 'static> {
    index: usize,
    _phantom: PhantomData<fn() -> T>,
}

impl<T: 'static> Copy for BbKey<T> {}

impl<T: 'static> Clone for BbKey<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> BbKey<T> {
    pub const fn new(index: usize) -> Self {
        Self {
            index,
            _phantom: PhantomData,
        }
    }

    pub fn index(self) -> usize {
        self.index
    }
}

/// A slot value together with whether it was ever written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BbValue<T> {
    pub value: T,
    pub is_initialized: bool,
}

#[derive(Debug)]
struct Pool<T> {
    names: HashMap<String, usize>,
    cells: Vec<BbValue<T>>,
}

impl<T> Default for Pool<T> {
    fn default() -> Self {
        Self {
            names: HashMap::new(),
            cells: Vec::new(),
        }
    }
}

/// Per-agent, name-addressed, multi-typed variable store.
///
/// Nodes register the names they need once at construction and keep the returned keys; reads and
/// writes afterwards are index lookups into the pool for that type.
#[derive(Default)]
pub struct Blackboard {
    pools: BTreeMap<TypeId, Box<dyn Any>>,
}

impl Blackboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name` for values of type `T`, returning its slot key.
    ///
    /// Registering the same `(name, T)` pair again returns the same key. New slots start
    /// uninitialized and hold `T::default()`.
    pub fn register<T>(&mut self, name: &str) -> BbKey<T>
    where
        T: Clone + Default + 'static,
    {
        let pool = self.pool_mut::<T>();
        if let Some(&index) = pool.names.get(name) {
            return BbKey::new(index);
        }

        let index = pool.cells.len();
        pool.names.insert(name.to_owned(), index);
        pool.cells.push(BbValue::default());
        BbKey::new(index)
    }

    /// Look up a previously registered name without registering it.
    pub fn key<T: 'static>(&self, name: &str) -> Option<BbKey<T>> {
        let index = *self.pool::<T>()?.names.get(name)?;
        Some(BbKey::new(index))
    }

    /// Number of slots registered for type `T`.
    pub fn len<T: 'static>(&self) -> usize {
        self.pool::<T>().map(|p| p.cells.len()).unwrap_or(0)
    }

    pub fn set<T: 'static>(&mut self, key: BbKey<T>, value: T) {
        let cell = self
            .pool_mut_existing::<T>()
            .and_then(|p| p.cells.get_mut(key.index))
            .unwrap_or_else(|| unregistered::<T>(key.index));
        *cell = BbValue {
            value,
            is_initialized: true,
        };
    }

    /// Read a slot, returning `T::default()` if it was never written.
    pub fn get<T: Clone + 'static>(&self, key: BbKey<T>) -> T {
        self.cell(key).value.clone()
    }

    pub fn get_ref<T: 'static>(&self, key: BbKey<T>) -> &T {
        &self.cell(key).value
    }

    /// Read a slot and report whether it was ever written.
    pub fn get_safe<T: Clone + 'static>(&self, key: BbKey<T>) -> BbValue<T> {
        self.cell(key).clone()
    }

    pub fn is_initialized<T: 'static>(&self, key: BbKey<T>) -> bool {
        self.cell(key).is_initialized
    }

    fn cell<T: 'static>(&self, key: BbKey<T>) -> &BbValue<T> {
        self.pool::<T>()
            .and_then(|p| p.cells.get(key.index))
            .unwrap_or_else(|| unregistered::<T>(key.index))
    }

    fn pool<T: 'static>(&self) -> Option<&Pool<T>> {
        self.pools.get(&TypeId::of::<T>())?.downcast_ref::<Pool<T>>()
    }

    fn pool_mut_existing<T: 'static>(&mut self) -> Option<&mut Pool<T>> {
        self.pools
            .get_mut(&TypeId::of::<T>())?
            .downcast_mut::<Pool<T>>()
    }

    fn pool_mut<T: 'static>(&mut self) -> &mut Pool<T> {
        self.pools
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Box::new(Pool::<T>::default()))
            .downcast_mut::<Pool<T>>()
            .unwrap_or_else(|| {
                panic!(
                    "blackboard pool for {} holds a different type",
                    type_name::<T>()
                )
            })
    }
}

fn unregistered<T>(index: usize) -> ! {
    panic!(
        "blackboard key index={} was never registered for type {}",
        index,
        type_name::<T>()
    )
}
