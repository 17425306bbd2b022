//! View tree - composable visual elements
//!
//! A view owns its children and keeps a weak link to its parent. Nodes live
//! behind a shared [`View`] handle so a child can point back up the tree
//! without owning it.
//!
//! Parent links are caller managed: [`View::new`] records the parent it is
//! given and never touches the children it receives. [`View::push_child`] and
//! [`View::remove_child`] keep both sides in step.

use std::sync::{Arc, Weak};

use dv_core::data::{Data, GraphNode, Transform};
use dv_core::ViewId;
use parking_lot::RwLock;
use serde_json::Value;

use crate::encoding::{EncodingChannels, MarkEncoding};
use crate::options::{Bounds, ChartConfig, Datasets, LayoutType, Projection};

/// Cached hierarchy level of a view that has not been asked for it yet
const UNCOMPUTED_LEVEL: i32 = -1;

/// A node of the view tree
pub struct ViewNode {
    id: ViewId,
    children: Vec<View>,
    parent: WeakView,
    hierarchy_level: i32,
    encodings: EncodingChannels,
    overwritten_encodings: EncodingChannels,
    data_node: Option<Arc<dyn GraphNode>>,

    /// Arrangement of the children
    pub layout: LayoutType,

    pub description: String,
    pub bounds: Option<Bounds>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub config: Option<ChartConfig>,
    pub projection: Option<Projection>,
    pub datasets: Option<Datasets>,
}

impl ViewNode {
    fn new(children: Vec<View>, layout: LayoutType, parent: WeakView) -> Self {
        Self {
            id: ViewId::new(),
            children,
            parent,
            hierarchy_level: UNCOMPUTED_LEVEL,
            encodings: EncodingChannels::new(),
            overwritten_encodings: EncodingChannels::new(),
            data_node: None,
            layout,
            description: String::new(),
            bounds: None,
            width: None,
            height: None,
            config: None,
            projection: None,
            datasets: None,
        }
    }

    pub fn id(&self) -> ViewId {
        self.id
    }

    /// Child views, in order
    pub fn children(&self) -> &[View] {
        &self.children
    }

    /// The memoized hierarchy level, if it has been computed
    pub fn cached_hierarchy_level(&self) -> Option<usize> {
        usize::try_from(self.hierarchy_level).ok()
    }

    pub fn encodings(&self) -> &EncodingChannels {
        &self.encodings
    }

    pub fn encodings_mut(&mut self) -> &mut EncodingChannels {
        &mut self.encodings
    }

    pub fn overwritten_encodings(&self) -> &EncodingChannels {
        &self.overwritten_encodings
    }

    pub fn overwritten_encodings_mut(&mut self) -> &mut EncodingChannels {
        &mut self.overwritten_encodings
    }

    pub fn data_transformation_node(&self) -> Option<&Arc<dyn GraphNode>> {
        self.data_node.as_ref()
    }
}

impl std::fmt::Debug for ViewNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewNode")
            .field("id", &self.id)
            .field("layout", &self.layout)
            .field("children", &self.children.len())
            .field("hierarchy_level", &self.hierarchy_level)
            .field("encodings", &self.encodings.len())
            .field("overwritten_encodings", &self.overwritten_encodings.len())
            .field("data_bound", &self.data_node.is_some())
            .finish_non_exhaustive()
    }
}

impl Drop for ViewNode {
    fn drop(&mut self) {
        // Free sole-owned descendants one at a time so deep trees do not
        // recurse through the default drop glue.
        let mut pending = std::mem::take(&mut self.children);
        while let Some(child) = pending.pop() {
            if let Ok(lock) = Arc::try_unwrap(child.0) {
                let mut node = lock.into_inner();
                pending.append(&mut node.children);
            }
        }
    }
}

/// Shared handle to a view node
#[derive(Clone)]
pub struct View(Arc<RwLock<ViewNode>>);

/// Non-owning link to a view, used for parent back-references
#[derive(Clone, Default)]
pub struct WeakView(Weak<RwLock<ViewNode>>);

impl WeakView {
    /// The view, if it is still alive
    pub fn upgrade(&self) -> Option<View> {
        self.0.upgrade().map(View)
    }
}

impl View {
    /// Create a view with its initial children and parent.
    ///
    /// The children keep whatever parent they already had.
    pub fn new(children: Vec<View>, layout: LayoutType, parent: Option<&View>) -> Self {
        let parent = parent.map(View::downgrade).unwrap_or_default();
        let node = ViewNode::new(children, layout, parent);

        tracing::trace!("Created view {} ({:?}, {} children)", node.id, layout, node.children.len());
        Self(Arc::new(RwLock::new(node)))
    }

    /// Create a childless, parentless view
    pub fn leaf(layout: LayoutType) -> Self {
        Self::new(Vec::new(), layout, None)
    }

    pub fn id(&self) -> ViewId {
        self.0.read().id
    }

    pub fn layout(&self) -> LayoutType {
        self.0.read().layout
    }

    pub fn set_layout(&self, layout: LayoutType) {
        self.0.write().layout = layout;
    }

    /// Whether both handles point at the same node
    pub fn ptr_eq(a: &View, b: &View) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }

    pub fn downgrade(&self) -> WeakView {
        WeakView(Arc::downgrade(&self.0))
    }

    /// Run a closure with read access to the node.
    ///
    /// The node stays locked for the whole closure. Calling a mutating
    /// method of the same view from inside it deadlocks.
    pub fn with_node<R>(&self, f: impl FnOnce(&ViewNode) -> R) -> R {
        f(&self.0.read())
    }

    /// Run a closure with write access to the node.
    ///
    /// The node stays locked for the whole closure. Calling any method of the
    /// same view from inside it deadlocks; use the `ViewNode` it is given.
    pub fn with_node_mut<R>(&self, f: impl FnOnce(&mut ViewNode) -> R) -> R {
        f(&mut self.0.write())
    }

    // Tree navigation

    /// Handles to the child views, in order
    pub fn children(&self) -> Vec<View> {
        self.0.read().children.clone()
    }

    pub fn child_count(&self) -> usize {
        self.0.read().children.len()
    }

    /// The parent view, if one was recorded and is still alive
    pub fn parent(&self) -> Option<View> {
        self.0.read().parent.upgrade()
    }

    /// Overwrite the parent back-reference without checking the tree
    pub fn set_parent(&self, parent: Option<&View>) {
        self.0.write().parent = parent.map(View::downgrade).unwrap_or_default();
    }

    /// Append a child and point its parent link at this view
    pub fn push_child(&self, child: View) {
        child.set_parent(Some(self));
        self.0.write().children.push(child);
    }

    /// Detach the child with the given id, clearing its parent link
    pub fn remove_child(&self, id: ViewId) -> Option<View> {
        let removed = {
            let mut node = self.0.write();
            let index = node.children.iter().position(|child| child.id() == id)?;
            node.children.remove(index)
        };

        if removed.parent().is_some_and(|parent| View::ptr_eq(&parent, self)) {
            removed.set_parent(None);
        }
        Some(removed)
    }

    /// Follow parent links to the top of the tree
    pub fn root(&self) -> View {
        let mut current = self.clone();
        while let Some(parent) = current.parent() {
            current = parent;
        }
        current
    }

    /// Number of parent links between this view and the root
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self.parent();
        while let Some(view) = current {
            depth += 1;
            current = view.parent();
        }
        depth
    }

    /// This view followed by all of its descendants, in pre-order
    pub fn flat_hierarchy(&self) -> Vec<View> {
        let mut successors = Vec::new();
        let mut pending = vec![self.clone()];

        while let Some(view) = pending.pop() {
            // reversed so the first child is visited next
            pending.extend(view.children().into_iter().rev());
            successors.push(view);
        }

        successors
    }

    /// Find a view in this subtree by id
    pub fn find(&self, id: ViewId) -> Option<View> {
        self.flat_hierarchy().into_iter().find(|view| view.id() == id)
    }

    // Hierarchy level

    /// Height of the subtree rooted at this view: 0 for a leaf, otherwise one
    /// more than the highest child.
    ///
    /// The result is memoized on every visited node and never recomputed on
    /// its own. Mutating the tree afterwards leaves the old value in place
    /// until [`invalidate_hierarchy_level`](Self::invalidate_hierarchy_level)
    /// or [`invalidate_hierarchy_levels`](Self::invalidate_hierarchy_levels)
    /// is called.
    pub fn hierarchy_level(&self) -> usize {
        if let Some(level) = self.cached_hierarchy_level() {
            return level;
        }

        // Post-order over the views that still need a level. A view is
        // resolved on its second visit, once every child holds a cached level.
        let mut pending = vec![(self.clone(), false)];

        while let Some((view, children_done)) = pending.pop() {
            if view.cached_hierarchy_level().is_some() {
                continue;
            }

            let children = view.children();
            if children_done || children.is_empty() {
                let level = children
                    .iter()
                    .filter_map(View::cached_hierarchy_level)
                    .max()
                    .map_or(0, |highest| highest + 1);
                view.memoize_hierarchy_level(level);
            } else {
                pending.push((view, true));
                pending.extend(children.into_iter().map(|child| (child, false)));
            }
        }

        self.cached_hierarchy_level().unwrap_or(0)
    }

    /// The memoized hierarchy level, without computing it
    pub fn cached_hierarchy_level(&self) -> Option<usize> {
        self.0.read().cached_hierarchy_level()
    }

    fn memoize_hierarchy_level(&self, level: usize) {
        let mut node = self.0.write();
        if node.hierarchy_level == UNCOMPUTED_LEVEL {
            tracing::trace!("Hierarchy level of {} is {}", node.id, level);
            node.hierarchy_level = i32::try_from(level).unwrap_or(i32::MAX);
        }
    }

    /// Forget the memoized level of this view only
    pub fn invalidate_hierarchy_level(&self) {
        self.0.write().hierarchy_level = UNCOMPUTED_LEVEL;
    }

    /// Forget the memoized level of every view in this subtree
    pub fn invalidate_hierarchy_levels(&self) {
        for view in self.flat_hierarchy() {
            view.invalidate_hierarchy_level();
        }
    }

    // Encodings

    /// Bind a value to a channel, replacing any previous binding
    pub fn set_encoded_value(&self, channel: MarkEncoding, value: impl Into<Value>) {
        self.0.write().encodings.set(channel, value.into());
    }

    /// The value bound to a channel, if any
    pub fn get_encoded_value(&self, channel: MarkEncoding) -> Option<Value> {
        self.0.read().encodings.get(channel).cloned()
    }

    /// Unbind a channel. Unbound channels are ignored.
    pub fn delete_encoded_value(&self, channel: MarkEncoding) {
        self.0.write().encodings.delete(channel);
    }

    /// Record a value that overrides a channel. Stored separately from the
    /// regular bindings; consumers decide which store wins.
    pub fn set_overwritten_value(&self, channel: MarkEncoding, value: impl Into<Value>) {
        self.0.write().overwritten_encodings.set(channel, value.into());
    }

    pub fn get_overwritten_value(&self, channel: MarkEncoding) -> Option<Value> {
        self.0.read().overwritten_encodings.get(channel).cloned()
    }

    pub fn delete_overwritten_value(&self, channel: MarkEncoding) {
        self.0.write().overwritten_encodings.delete(channel);
    }

    // Data

    /// The bound data-transformation node
    pub fn data_transformation_node(&self) -> Option<Arc<dyn GraphNode>> {
        self.0.read().data_node.clone()
    }

    /// Bind this view to a data-transformation node, or unbind it with `None`
    pub fn set_data_transformation_node(&self, node: Option<Arc<dyn GraphNode>>) {
        let id = self.id();
        match &node {
            Some(node) => tracing::debug!("Binding view {} to data node '{}'", id, node.node_name()),
            None => tracing::debug!("Unbinding data node from view {}", id),
        }
        self.0.write().data_node = node;
    }

    /// The dataset reported by the bound node right now.
    ///
    /// `None` when no node is bound. Errors from the node are returned as is.
    pub fn data(&self) -> anyhow::Result<Option<Arc<Data>>> {
        let Some(node) = self.data_transformation_node() else {
            return Ok(None);
        };

        node.schema().inspect_err(|e| {
            tracing::warn!("Data node '{}' failed to report its data: {}", node.node_name(), e);
        })
    }

    /// The transform pipeline reported by the bound node right now.
    ///
    /// Empty when no node is bound. Errors from the node are returned as is.
    pub fn transform(&self) -> anyhow::Result<Vec<Transform>> {
        let Some(node) = self.data_transformation_node() else {
            return Ok(Vec::new());
        };

        node.transform().inspect_err(|e| {
            tracing::warn!("Data node '{}' failed to report its transform: {}", node.node_name(), e);
        })
    }
}

impl std::fmt::Debug for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (id, layout, children, data_node) = {
            let node = self.0.read();
            (node.id, node.layout, node.children.len(), node.data_node.clone())
        };

        // the node name is read after the lock is released
        f.debug_struct("View")
            .field("id", &id)
            .field("layout", &layout)
            .field("children", &children)
            .field("data_node", &data_node.as_ref().map(|node| node.node_name()))
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dv_data::MemoryGraphNode;
    use serde_json::json;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    fn ids(views: &[View]) -> Vec<ViewId> {
        views.iter().map(View::id).collect()
    }

    /// A(B(D, E), C)
    fn sample_tree() -> (View, View, View, View, View) {
        let a = View::leaf(LayoutType::VerticalConcatenate);
        let b = View::leaf(LayoutType::Overlay);
        let c = View::leaf(LayoutType::Overlay);
        let d = View::leaf(LayoutType::Concatenate);
        let e = View::leaf(LayoutType::Concatenate);

        b.push_child(d.clone());
        b.push_child(e.clone());
        a.push_child(b.clone());
        a.push_child(c.clone());

        (a, b, c, d, e)
    }

    struct FailingNode;

    impl GraphNode for FailingNode {
        fn schema(&self) -> anyhow::Result<Option<Arc<Data>>> {
            anyhow::bail!("schema unavailable")
        }

        fn transform(&self) -> anyhow::Result<Vec<Transform>> {
            Err(anyhow::anyhow!("transform unavailable").context("failing node"))
        }

        fn node_name(&self) -> &str {
            "failing"
        }
    }

    #[test]
    fn test_new_view_defaults() {
        let view = View::leaf(LayoutType::Overlay);

        assert_eq!(view.layout(), LayoutType::Overlay);
        assert!(view.parent().is_none());
        assert!(view.data_transformation_node().is_none());
        assert!(view.cached_hierarchy_level().is_none());
        view.with_node(|node| {
            assert!(node.encodings().is_empty());
            assert!(node.overwritten_encodings().is_empty());
            assert!(node.description.is_empty());
            assert!(node.width.is_none());
        });
    }

    #[test]
    fn test_ids_are_unique() {
        let a = View::leaf(LayoutType::Concatenate);
        let b = View::leaf(LayoutType::Concatenate);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_constructor_does_not_touch_children() {
        let child = View::leaf(LayoutType::Concatenate);
        let parent = View::new(vec![child.clone()], LayoutType::Overlay, None);

        assert_eq!(parent.child_count(), 1);
        assert!(child.parent().is_none());
    }

    #[test]
    fn test_constructor_records_parent() {
        let root = View::leaf(LayoutType::Concatenate);
        let child = View::new(Vec::new(), LayoutType::Overlay, Some(&root));

        assert!(View::ptr_eq(&child.parent().unwrap(), &root));
        // recorded, not attached
        assert_eq!(root.child_count(), 0);
    }

    #[test]
    fn test_push_and_remove_child() {
        let (a, b, c, _, _) = sample_tree();

        assert!(View::ptr_eq(&b.parent().unwrap(), &a));
        assert!(View::ptr_eq(&c.parent().unwrap(), &a));

        let removed = a.remove_child(c.id()).unwrap();
        assert!(View::ptr_eq(&removed, &c));
        assert!(c.parent().is_none());
        assert_eq!(ids(&a.children()), vec![b.id()]);

        assert!(a.remove_child(c.id()).is_none());
    }

    #[test]
    fn test_parent_link_is_weak() {
        let child = View::leaf(LayoutType::Concatenate);
        {
            let parent = View::leaf(LayoutType::Overlay);
            parent.push_child(child.clone());
            assert!(child.parent().is_some());
        }
        assert!(child.parent().is_none());
    }

    #[test]
    fn test_root_and_depth() {
        let (a, b, _, d, _) = sample_tree();

        assert!(View::ptr_eq(&d.root(), &a));
        assert!(View::ptr_eq(&a.root(), &a));
        assert_eq!(a.depth(), 0);
        assert_eq!(b.depth(), 1);
        assert_eq!(d.depth(), 2);
    }

    #[test]
    fn test_flat_hierarchy_is_pre_order() {
        let (a, b, c, d, e) = sample_tree();

        assert_eq!(ids(&a.flat_hierarchy()), ids(&[a.clone(), b.clone(), d, e, c]));
    }

    #[test]
    fn test_flat_hierarchy_of_leaf() {
        let leaf = View::leaf(LayoutType::Concatenate);
        let flat = leaf.flat_hierarchy();

        assert_eq!(flat.len(), 1);
        assert!(View::ptr_eq(&flat[0], &leaf));
    }

    #[test]
    fn test_find() {
        let (a, _, _, _, e) = sample_tree();

        assert!(View::ptr_eq(&a.find(e.id()).unwrap(), &e));
        assert!(e.find(a.id()).is_none());
    }

    #[test]
    fn test_leaf_hierarchy_level() {
        let leaf = View::leaf(LayoutType::Concatenate);
        assert_eq!(leaf.hierarchy_level(), 0);
        assert_eq!(leaf.cached_hierarchy_level(), Some(0));
    }

    #[test]
    fn test_hierarchy_level_follows_deepest_branch() {
        let (a, b, c, d, _) = sample_tree();

        // evaluate a shallow node first so order cannot matter
        assert_eq!(c.hierarchy_level(), 0);
        assert_eq!(a.hierarchy_level(), 2);
        assert_eq!(b.hierarchy_level(), 1);
        assert_eq!(d.hierarchy_level(), 0);

        let expected = 1 + a.children().iter().map(View::hierarchy_level).max().unwrap();
        assert_eq!(a.hierarchy_level(), expected);
    }

    #[test]
    fn test_shared_subtree_counts_once_per_branch() {
        let shared = View::leaf(LayoutType::Overlay);
        shared.push_child(View::leaf(LayoutType::Concatenate));

        let left = View::new(vec![shared.clone()], LayoutType::Concatenate, None);
        let root = View::new(vec![left, shared], LayoutType::HorizontalConcatenate, None);

        assert_eq!(root.hierarchy_level(), 3);
    }

    #[test]
    fn test_hierarchy_level_is_memoized() {
        let root = View::leaf(LayoutType::Concatenate);
        let child = View::leaf(LayoutType::Overlay);
        root.push_child(child.clone());

        assert_eq!(root.hierarchy_level(), 1);

        child.push_child(View::leaf(LayoutType::Concatenate));
        assert_eq!(root.hierarchy_level(), 1);

        // invalidating only the root still reads the stale child level
        root.invalidate_hierarchy_level();
        assert_eq!(root.hierarchy_level(), 1);

        root.invalidate_hierarchy_levels();
        assert_eq!(root.hierarchy_level(), 2);
    }

    #[test]
    fn test_deep_tree_does_not_overflow() {
        let root = View::leaf(LayoutType::Concatenate);
        let mut tip = root.clone();
        for _ in 0..50_000 {
            let next = View::leaf(LayoutType::Concatenate);
            tip.push_child(next.clone());
            tip = next;
        }

        assert_eq!(root.hierarchy_level(), 50_000);
        assert_eq!(root.flat_hierarchy().len(), 50_001);
        assert_eq!(tip.depth(), 50_000);

        drop(root);
        assert!(tip.parent().is_none());
    }

    #[test]
    fn test_drop_keeps_shared_subtrees() {
        let shared = View::leaf(LayoutType::Overlay);
        shared.push_child(View::leaf(LayoutType::Concatenate));

        let root = View::new(vec![shared.clone()], LayoutType::Concatenate, None);
        drop(root);

        assert_eq!(shared.child_count(), 1);
        assert_eq!(shared.hierarchy_level(), 1);
    }

    /// Graph node that records whether its view was locked when asked for
    /// its name
    struct LockCheckingNode {
        view: WeakView,
        saw_locked_view: AtomicBool,
        name_calls: AtomicUsize,
    }

    impl GraphNode for LockCheckingNode {
        fn schema(&self) -> anyhow::Result<Option<Arc<Data>>> {
            Ok(None)
        }

        fn transform(&self) -> anyhow::Result<Vec<Transform>> {
            Ok(Vec::new())
        }

        fn node_name(&self) -> &str {
            self.name_calls.fetch_add(1, Ordering::SeqCst);
            if let Some(view) = self.view.upgrade() {
                if view.0.try_write().is_none() {
                    self.saw_locked_view.store(true, Ordering::SeqCst);
                }
            }
            "lock-checking"
        }
    }

    #[test]
    fn test_node_name_is_read_without_view_lock() {
        dv_core::logging::init_test_logging();

        let view = View::leaf(LayoutType::Concatenate);
        let node = Arc::new(LockCheckingNode {
            view: view.downgrade(),
            saw_locked_view: AtomicBool::new(false),
            name_calls: AtomicUsize::new(0),
        });

        view.set_data_transformation_node(Some(node.clone()));
        let debug = format!("{:?}", view);
        view.set_data_transformation_node(None);

        assert!(debug.contains("lock-checking"));
        assert!(node.name_calls.load(Ordering::SeqCst) >= 1);
        assert!(!node.saw_locked_view.load(Ordering::SeqCst));
    }

    #[test]
    fn test_encoded_values() {
        let view = View::leaf(LayoutType::Concatenate);
        let x = json!({"field": "Horsepower", "type": "quantitative"});

        view.set_encoded_value(MarkEncoding::X, x.clone());
        assert_eq!(view.get_encoded_value(MarkEncoding::X), Some(x));

        view.set_encoded_value(MarkEncoding::X, "literal");
        assert_eq!(view.get_encoded_value(MarkEncoding::X), Some(json!("literal")));

        view.delete_encoded_value(MarkEncoding::X);
        assert!(view.get_encoded_value(MarkEncoding::X).is_none());

        // deleting an unbound channel is a no-op
        view.delete_encoded_value(MarkEncoding::Color);
        assert!(view.get_encoded_value(MarkEncoding::Color).is_none());
    }

    #[test]
    fn test_overwritten_store_is_independent() {
        let view = View::leaf(LayoutType::Concatenate);

        view.set_encoded_value(MarkEncoding::Color, "steelblue");
        view.set_overwritten_value(MarkEncoding::Color, "firebrick");
        view.set_overwritten_value(MarkEncoding::Size, 12);

        assert_eq!(view.get_encoded_value(MarkEncoding::Color), Some(json!("steelblue")));
        assert_eq!(view.get_overwritten_value(MarkEncoding::Color), Some(json!("firebrick")));
        assert!(view.get_encoded_value(MarkEncoding::Size).is_none());

        view.delete_overwritten_value(MarkEncoding::Color);
        assert!(view.get_overwritten_value(MarkEncoding::Color).is_none());
        assert_eq!(view.get_encoded_value(MarkEncoding::Color), Some(json!("steelblue")));

        view.with_node(|node| {
            assert_eq!(node.encodings().len(), 1);
            assert_eq!(node.overwritten_encodings().len(), 1);
        });
    }

    #[test]
    fn test_unbound_data_and_transform() {
        let view = View::leaf(LayoutType::Concatenate);

        assert!(view.data().unwrap().is_none());
        assert!(view.transform().unwrap().is_empty());
    }

    #[test]
    fn test_data_passes_through() {
        dv_core::logging::init_test_logging();

        let transforms = vec![
            Transform::new(json!({"filter": "datum.Year > 1970"})),
            Transform::new(json!({"aggregate": [{"op": "mean", "field": "Horsepower", "as": "hp"}]})),
        ];
        let node = MemoryGraphNode::new("cars")
            .with_data(Data::new(json!({"url": "data/cars.json"})))
            .with_transform(transforms.clone());

        let view = View::leaf(LayoutType::Concatenate);
        view.set_data_transformation_node(Some(Arc::new(node.clone())));

        let data = view.data().unwrap().unwrap();
        assert!(Arc::ptr_eq(&data, &node.schema().unwrap().unwrap()));
        assert_eq!(view.transform().unwrap(), transforms);
        assert_eq!(view.data_transformation_node().unwrap().node_name(), "cars");
    }

    #[test]
    fn test_data_is_not_cached() {
        let node = MemoryGraphNode::new("live");
        let view = View::leaf(LayoutType::Concatenate);
        view.set_data_transformation_node(Some(Arc::new(node.clone())));

        assert!(view.data().unwrap().is_none());

        node.set_data(Data::new(json!({"values": [1, 2, 3]})));
        node.push_transform(Transform::new(json!({"filter": "datum.data > 1"})));

        assert_eq!(view.data().unwrap().unwrap().as_value(), &json!({"values": [1, 2, 3]}));
        assert_eq!(view.transform().unwrap().len(), 1);
    }

    #[test]
    fn test_rebinding_switches_source() {
        let first = MemoryGraphNode::new("first").with_data(Data::new(json!({"name": "first"})));
        let second = MemoryGraphNode::new("second")
            .with_data(Data::new(json!({"name": "second"})))
            .with_transform(vec![Transform::new(json!({"sample": 10}))]);

        let view = View::leaf(LayoutType::Concatenate);
        view.set_data_transformation_node(Some(Arc::new(first)));
        assert_eq!(view.data().unwrap().unwrap().as_value(), &json!({"name": "first"}));
        assert!(view.transform().unwrap().is_empty());

        view.set_data_transformation_node(Some(Arc::new(second)));
        assert_eq!(view.data().unwrap().unwrap().as_value(), &json!({"name": "second"}));
        assert_eq!(view.transform().unwrap().len(), 1);

        view.set_data_transformation_node(None);
        assert!(view.data().unwrap().is_none());
        assert!(view.transform().unwrap().is_empty());
    }

    #[test]
    fn test_node_errors_propagate_unchanged() {
        let view = View::leaf(LayoutType::Concatenate);
        view.set_data_transformation_node(Some(Arc::new(FailingNode)));

        let err = view.data().unwrap_err();
        assert_eq!(err.to_string(), "schema unavailable");

        let err = view.transform().unwrap_err();
        assert_eq!(err.to_string(), "failing node");
        assert_eq!(err.root_cause().to_string(), "transform unavailable");
    }
}
