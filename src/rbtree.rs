use std::{cmp::Ordering, collections::VecDeque, mem};

use log::{debug, trace, warn};
use rand::Rng;

use crate::depth::Depth;
use crate::error::{Error, Result};

/// Returned by [`RbTree::black_height`] when the left and right sub-trees
/// of some node disagree on their number of blacks.
pub const BLACK_HEIGHT_MISMATCH: isize = -1;

/// RbTree manage a single instance of in-memory index using
/// [red-black][rbtree] tree.
///
/// Nodes are held in an arena owned by the tree, child and parent links
/// are arena offsets. Ordering is decided solely by the comparator
/// supplied while constructing the tree.
///
/// [rbtree]: https://en.wikipedia.org/wiki/Red%E2%80%93black_tree
#[derive(Clone)]
pub struct RbTree<K, V, C> {
    name: String,
    nodes: Vec<Node<K, V>>,
    root: Option<NodeId>,
    cmp: C,
}

/// Different ways to construct a new RbTree instance.
impl<K, V, C> RbTree<K, V, C>
where
    K: Clone,
    V: Clone,
    C: Fn(&K, &K) -> Ordering,
{
    /// Create an empty instance of RbTree, identified by `name`,
    /// all keys shall be ordered using `cmp`.
    pub fn new<S>(name: S, cmp: C) -> RbTree<K, V, C>
    where
        S: AsRef<str>,
    {
        RbTree {
            name: name.as_ref().to_string(),
            nodes: Default::default(),
            root: Default::default(),
            cmp,
        }
    }

    /// Create a new instance of RbTree and load it with entries from
    /// `iter`. Later entries overwrite earlier entries for the same key.
    pub fn load_from<S, I>(name: S, cmp: C, iter: I) -> Result<RbTree<K, V, C>, K>
    where
        S: AsRef<str>,
        I: Iterator<Item = (K, V)>,
    {
        let mut tree = RbTree::new(name, cmp);
        for (key, value) in iter {
            tree.insert(key, value)?;
        }
        Ok(tree)
    }
}

/// Maintenance API.
impl<K, V, C> RbTree<K, V, C>
where
    K: Clone,
    V: Clone,
    C: Fn(&K, &K) -> Ordering,
{
    /// Identify this instance. Applications can choose unique names while
    /// creating RbTree instances.
    #[inline]
    pub fn id(&self) -> String {
        self.name.clone()
    }

    /// Return number of entries in this instance.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check whether this index is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Return quickly with basic statisics, only entries() and node_size()
    /// are valid with this statisics.
    pub fn stats(&self) -> Stats {
        Stats::new(self.len(), mem::size_of::<Node<K, V>>())
    }
}

/// Write operations on RbTree instance.
impl<K, V, C> RbTree<K, V, C>
where
    K: Clone,
    V: Clone,
    C: Fn(&K, &K) -> Ordering,
{
    /// Set value for key. If there is an existing entry for key,
    /// overwrite the old value with new value and return the old value,
    /// tree shape is left untouched.
    ///
    /// Keys that do not compare equal to themselves are rejected with
    /// [`Error::InvalidKey`], before touching the tree.
    pub fn insert(&mut self, key: K, value: V) -> Result<Option<V>, K> {
        if (self.cmp)(&key, &key) != Ordering::Equal {
            warn!(target: "rbtree", "{}: insert rejected, key not comparable", self.name);
            return Err(Error::InvalidKey);
        }

        let (mut parent, mut side) = (None, Side::Left);
        let mut curr = self.root;
        while let Some(id) = curr {
            parent = Some(id);
            curr = match (self.cmp)(&key, &self.n(id).key) {
                Ordering::Less => {
                    side = Side::Left;
                    self.n(id).left
                }
                Ordering::Greater => {
                    side = Side::Right;
                    self.n(id).right
                }
                Ordering::Equal => {
                    let old_value = mem::replace(&mut self.n_mut(id).value, value);
                    return Ok(Some(old_value));
                }
            };
        }

        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(key, value, parent));
        match parent {
            None => {
                self.n_mut(id).set_black();
                self.root = Some(id);
            }
            Some(parent) => {
                self.set_child(parent, side, Some(id));
                self.insert_fixup(id);
            }
        }
        debug!(target: "rbtree", "{}: inserted entry, len {}", self.name, self.len());
        Ok(None)
    }

    /// Delete key from this instance and return its value. If key is
    /// not present, then delete is effectively a no-op.
    pub fn delete(&mut self, key: &K) -> Option<V> {
        let z = self.find(key)?;

        // reduce to a node with at most one child.
        let y = match (self.n(z).left, self.n(z).right) {
            (Some(_), Some(right)) => {
                let succ = leftmost(&self.nodes, right);
                self.swap_entry(z, succ);
                succ
            }
            _ => z,
        };

        let (parent, x) = {
            let node = self.n(y);
            (node.parent, node.left.or(node.right))
        };
        self.replace_child(parent, y, x);
        if let Some(x) = x {
            self.n_mut(x).parent = parent;
        }
        if self.n(y).is_black() {
            self.delete_fixup(x, parent);
        }

        let value = self.release(y);
        if let Some(root) = self.root {
            self.n_mut(root).set_black();
        }
        debug!(target: "rbtree", "{}: deleted entry, len {}", self.name, self.len());
        Some(value)
    }

    /// Validate red-black tree with following rules:
    ///
    /// * Root node is black.
    /// * From root to any leaf, no consecutive reds allowed in its path.
    /// * Number of blacks should be same under left child and right child.
    /// * Make sure keys are in sorted order.
    /// * Parent links point back to the owning node.
    /// * Height of the tree is within `2 * log2(n + 1)`.
    ///
    /// Additionally return full statistics on the tree. Refer to [`Stats`]
    /// for more information.
    pub fn validate(&self) -> Result<Stats, K> {
        let mut stats = Stats::new(self.len(), mem::size_of::<Node<K, V>>());
        stats.set_depths(Depth::new());

        if let Some(root) = self.root {
            if self.n(root).is_red() {
                return Err(Error::RedRoot);
            }
            if self.n(root).parent.is_some() {
                return Err(Error::BrokenParent(self.n(root).key.clone()));
            }
            let blacks = self.validate_tree(Some(root), 0, 0, &mut stats)?;
            stats.set_blacks(blacks);
        }

        let mut iter = self.iter().map(|(key, _)| key);
        if let Some(mut prev) = iter.next() {
            for key in iter {
                if (self.cmp)(&prev, &key) != Ordering::Less {
                    return Err(Error::SortError(prev, key));
                }
                prev = key;
            }
        }

        let height = stats.depths.as_ref().map_or(0, |d| d.max());
        let bound = (2.0 * ((self.len() + 1) as f64).log2()).floor() as usize;
        if height > bound {
            return Err(Error::HeightBound(height, bound));
        }
        Ok(stats)
    }
}

/// Read operations on RbTree instance.
impl<K, V, C> RbTree<K, V, C>
where
    K: Clone,
    V: Clone,
    C: Fn(&K, &K) -> Ordering,
{
    /// Get the value for key. Keys that do not compare equal to
    /// themselves are never found.
    pub fn search(&self, key: &K) -> Option<V> {
        self.find(key).map(|id| self.n(id).value.clone())
    }

    /// Check whether key is present in this index.
    pub fn contains_key(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Return the root node, if tree is not empty.
    pub fn root(&self) -> Option<&Node<K, V>> {
        self.root.map(|id| self.n(id))
    }

    /// Return the parent of `node`, None for root. Nodes borrowed from
    /// another tree have no parent here.
    pub fn parent(&self, node: &Node<K, V>) -> Option<&Node<K, V>> {
        self.link(node, node.parent)
    }

    /// Return the left child of `node`, None for nodes of another tree.
    pub fn left(&self, node: &Node<K, V>) -> Option<&Node<K, V>> {
        self.link(node, node.left)
    }

    /// Return the right child of `node`, None for nodes of another tree.
    pub fn right(&self, node: &Node<K, V>) -> Option<&Node<K, V>> {
        self.link(node, node.right)
    }

    /// Return a random entry from this index.
    pub fn random<R: Rng>(&self, rng: &mut R) -> Option<(K, V)> {
        let mut nref = self.root()?;

        let mut at_depth = rng.gen::<u8>() % 40;
        loop {
            let next = match rng.gen::<u8>() % 2 {
                0 => self.left(nref),
                _ => self.right(nref),
            };
            match next {
                Some(next) if at_depth > 0 => {
                    at_depth -= 1;
                    nref = next;
                }
                _ => break Some((nref.key.clone(), nref.value.clone())),
            }
        }
    }

    /// Return an iterator over all entries in this instance, in sort
    /// order.
    pub fn iter(&self) -> Iter<K, V> {
        Iter {
            nodes: &self.nodes,
            next: self.root.map(|root| leftmost(&self.nodes, root)),
        }
    }

    /// Walk every node in breadth-first order, left before right, and
    /// apply `visitor` on each of them. Nodes are not visited in sort
    /// order, use [`RbTree::iter`] for that.
    pub fn traverse_breadth_first<F>(&self, mut visitor: F)
    where
        F: FnMut(&Node<K, V>),
    {
        let mut frontier: VecDeque<NodeId> = self.root.into_iter().collect();
        while let Some(id) = frontier.pop_front() {
            let node = self.n(id);
            visitor(node);
            frontier.extend(node.left);
            frontier.extend(node.right);
        }
    }

    /// Compute the black-height of sub-tree under `node`, nil sub-tree
    /// has a black-height of 0. Return [`BLACK_HEIGHT_MISMATCH`] if any
    /// node in the sub-tree has unequal blacks under its children, or
    /// if `node` does not belong to this tree.
    pub fn black_height(&self, node: Option<&Node<K, V>>) -> isize {
        let node = match node {
            None => return 0,
            Some(node) if !self.owns(node) => return BLACK_HEIGHT_MISMATCH,
            Some(node) => node,
        };
        let lblacks = self.black_height(self.left(node));
        let rblacks = self.black_height(self.right(node));
        if lblacks == BLACK_HEIGHT_MISMATCH || lblacks != rblacks {
            return BLACK_HEIGHT_MISMATCH;
        }
        lblacks + if node.is_black() { 1 } else { 0 }
    }
}

impl<K, V, C> RbTree<K, V, C>
where
    K: Clone,
    V: Clone,
    C: Fn(&K, &K) -> Ordering,
{
    #[inline]
    fn n(&self, id: NodeId) -> &Node<K, V> {
        &self.nodes[id.0]
    }

    #[inline]
    fn n_mut(&mut self, id: NodeId) -> &mut Node<K, V> {
        &mut self.nodes[id.0]
    }

    // whether `node` lives in this tree's arena.
    #[inline]
    fn owns(&self, node: &Node<K, V>) -> bool {
        self.nodes.as_ptr_range().contains(&(node as *const Node<K, V>))
    }

    #[inline]
    fn link(&self, node: &Node<K, V>, id: Option<NodeId>) -> Option<&Node<K, V>> {
        if self.owns(node) {
            id.and_then(|id| self.nodes.get(id.0))
        } else {
            None
        }
    }

    #[inline]
    fn is_red(&self, id: Option<NodeId>) -> bool {
        id.map_or(false, |id| self.n(id).is_red())
    }

    #[inline]
    fn is_black(&self, id: Option<NodeId>) -> bool {
        !self.is_red(id)
    }

    #[inline]
    fn child(&self, id: NodeId, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.n(id).left,
            Side::Right => self.n(id).right,
        }
    }

    #[inline]
    fn set_child(&mut self, id: NodeId, side: Side, child: Option<NodeId>) {
        match side {
            Side::Left => self.n_mut(id).left = child,
            Side::Right => self.n_mut(id).right = child,
        }
    }

    // side of `parent` under which `child` hangs.
    #[inline]
    fn side_of(&self, parent: NodeId, child: NodeId) -> Side {
        if self.n(parent).left == Some(child) {
            Side::Left
        } else {
            Side::Right
        }
    }

    fn find(&self, key: &K) -> Option<NodeId> {
        if (self.cmp)(key, key) != Ordering::Equal {
            warn!(target: "rbtree", "{}: lookup with key not comparable", self.name);
            return None;
        }
        let mut curr = self.root;
        while let Some(id) = curr {
            curr = match (self.cmp)(key, &self.n(id).key) {
                Ordering::Less => self.n(id).left,
                Ordering::Greater => self.n(id).right,
                Ordering::Equal => return Some(id),
            };
        }
        None
    }

    // point `parent`'s link, that was pointing to `old`, to `new`. With
    // no parent, `new` becomes the root.
    fn replace_child(&mut self, parent: Option<NodeId>, old: NodeId, new: Option<NodeId>) {
        match parent {
            None => self.root = new,
            Some(parent) => {
                let side = self.side_of(parent, old);
                self.set_child(parent, side, new);
            }
        }
    }

    // swap key and value between two distinct nodes, links and colors
    // stay in place.
    fn swap_entry(&mut self, a: NodeId, b: NodeId) {
        let (lo, hi) = if a.0 < b.0 { (a.0, b.0) } else { (b.0, a.0) };
        let (head, tail) = self.nodes.split_at_mut(hi);
        let (x, y) = (&mut head[lo], &mut tail[0]);
        mem::swap(&mut x.key, &mut y.key);
        mem::swap(&mut x.value, &mut y.value);
    }

    // free the slot held by detached node `y`. The last node in the arena
    // moves into the slot, re-point its neighbours.
    fn release(&mut self, y: NodeId) -> V {
        let last = NodeId(self.nodes.len() - 1);
        let node = self.nodes.swap_remove(y.0);
        if last != y {
            let (parent, left, right) = {
                let moved = self.n(y);
                (moved.parent, moved.left, moved.right)
            };
            self.replace_child(parent, last, Some(y));
            for child in left.into_iter().chain(right) {
                self.n_mut(child).parent = Some(y);
            }
        }
        node.value
    }

    //--------- insert fix-up ----------------

    fn insert_fixup(&mut self, mut z: NodeId) {
        loop {
            let p = match self.n(z).parent {
                Some(p) if self.n(p).is_red() => p,
                _ => break,
            };
            // red parent is never the root.
            let g = match self.n(p).parent {
                Some(g) => g,
                None => break,
            };
            let side = self.side_of(g, p);
            match self.child(g, side.flip()) {
                Some(u) if self.n(u).is_red() => {
                    trace!(target: "rbtree", "{}: insert, red uncle", self.name);
                    self.n_mut(p).set_black();
                    self.n_mut(u).set_black();
                    self.n_mut(g).set_red();
                    z = g;
                }
                _ => {
                    let p = if self.side_of(p, z) != side {
                        trace!(target: "rbtree", "{}: insert, inner grandchild", self.name);
                        self.rotate(p, side);
                        mem::replace(&mut z, p)
                    } else {
                        p
                    };
                    trace!(target: "rbtree", "{}: insert, outer grandchild", self.name);
                    self.n_mut(p).set_black();
                    self.n_mut(g).set_red();
                    self.rotate(g, side.flip());
                    break;
                }
            }
        }

        if let Some(root) = self.root {
            self.n_mut(root).set_black();
        }
    }

    //--------- delete fix-up ----------------

    // `x` is one black short, `parent` is its parent since `x` can be nil.
    fn delete_fixup(&mut self, mut x: Option<NodeId>, mut parent: Option<NodeId>) {
        while x != self.root && self.is_black(x) {
            let p = match parent {
                Some(p) => p,
                None => break,
            };
            let side = if self.n(p).left == x {
                Side::Left
            } else {
                Side::Right
            };
            // sibling of a double-black position is never nil.
            let mut w = match self.child(p, side.flip()) {
                Some(w) => w,
                None => break,
            };

            if self.n(w).is_red() {
                trace!(target: "rbtree", "{}: delete, red sibling", self.name);
                self.n_mut(w).set_black();
                self.n_mut(p).set_red();
                self.rotate(p, side);
                w = match self.child(p, side.flip()) {
                    Some(w) => w,
                    None => break,
                };
            }

            let (near, far) = (self.child(w, side), self.child(w, side.flip()));
            if self.is_black(near) && self.is_black(far) {
                trace!(target: "rbtree", "{}: delete, black nephews", self.name);
                self.n_mut(w).set_red();
                x = Some(p);
                parent = self.n(p).parent;
                continue;
            }

            if self.is_black(far) {
                trace!(target: "rbtree", "{}: delete, red near nephew", self.name);
                if let Some(near) = near {
                    self.n_mut(near).set_black();
                }
                self.n_mut(w).set_red();
                self.rotate(w, side.flip());
                w = match self.child(p, side.flip()) {
                    Some(w) => w,
                    None => break,
                };
            }

            trace!(target: "rbtree", "{}: delete, red far nephew", self.name);
            let black = self.n(p).black;
            self.n_mut(w).black = black;
            self.n_mut(p).set_black();
            if let Some(far) = self.child(w, side.flip()) {
                self.n_mut(far).set_black();
            }
            self.rotate(p, side);
            x = self.root;
            break;
        }

        if let Some(x) = x {
            self.n_mut(x).set_black();
        }
    }

    //--------- rotation routines ----------------

    // rotate `x` down towards `side`, its child on the other side takes
    // its place.
    #[inline]
    fn rotate(&mut self, x: NodeId, side: Side) {
        match side {
            Side::Left => self.rotate_left(x),
            Side::Right => self.rotate_right(x),
        }
    }

    //              (p)                       (p)
    //               |                         |
    //               x                         y
    //              / \                       / \
    //             /   \                     /   \
    //            /     \                   /     \
    //          left     y                 x       yr
    //                  / \               / \
    //                yl   yr          left  yl
    //
    fn rotate_left(&mut self, x: NodeId) {
        let y = match self.n(x).right {
            Some(y) => y,
            None => panic!("rotate_left(): missing right child ? Call the programmer"),
        };
        let yl = self.n(y).left;
        self.n_mut(x).right = yl;
        if let Some(yl) = yl {
            self.n_mut(yl).parent = Some(x);
        }
        let parent = self.n(x).parent;
        self.n_mut(y).parent = parent;
        self.replace_child(parent, x, Some(y));
        self.n_mut(y).left = Some(x);
        self.n_mut(x).parent = Some(y);
    }

    //              (p)                       (p)
    //               |                         |
    //               x                         y
    //              / \                       / \
    //             /   \                     /   \
    //            /     \                   /     \
    //           y     right              yl       x
    //          / \                               / \
    //        yl   yr                           yr  right
    //
    fn rotate_right(&mut self, x: NodeId) {
        let y = match self.n(x).left {
            Some(y) => y,
            None => panic!("rotate_right(): missing left child ? Call the programmer"),
        };
        let yr = self.n(y).right;
        self.n_mut(x).left = yr;
        if let Some(yr) = yr {
            self.n_mut(yr).parent = Some(x);
        }
        let parent = self.n(x).parent;
        self.n_mut(y).parent = parent;
        self.replace_child(parent, x, Some(y));
        self.n_mut(y).right = Some(x);
        self.n_mut(x).parent = Some(y);
    }

    //--------- validation ----------------

    fn validate_tree(
        &self,
        id: Option<NodeId>,
        mut nb: usize,
        depth: usize,
        stats: &mut Stats,
    ) -> Result<usize, K> {
        let id = match id {
            None => {
                if let Some(depths) = stats.depths.as_mut() {
                    depths.sample(depth);
                }
                return Ok(nb);
            }
            Some(id) => id,
        };

        let node = self.n(id);
        if node.is_black() {
            nb += 1;
        }
        for child in node.left.into_iter().chain(node.right) {
            let cnode = self.n(child);
            if cnode.parent != Some(id) {
                return Err(Error::BrokenParent(cnode.key.clone()));
            }
            if node.is_red() && cnode.is_red() {
                let (pkey, ckey) = (node.key.clone(), cnode.key.clone());
                return Err(Error::ConsecutiveReds(pkey, ckey));
            }
        }
        let lblacks = self.validate_tree(node.left, nb, depth + 1, stats)?;
        let rblacks = self.validate_tree(node.right, nb, depth + 1, stats)?;
        if lblacks != rblacks {
            let err = format!("left: {} right: {}", lblacks, rblacks);
            return Err(Error::UnbalancedBlacks(err));
        }
        Ok(lblacks)
    }
}

#[cfg(test)]
impl<K, V, C> RbTree<K, V, C>
where
    K: Clone,
    V: Clone,
    C: Fn(&K, &K) -> Ordering,
{
    // build a tree by hand, `shape` lists (key, black, left, right) with
    // children as offsets into `shape`; first entry is the root.
    pub(crate) fn from_shape(
        cmp: C,
        shape: Vec<(K, V, bool, Option<usize>, Option<usize>)>,
    ) -> RbTree<K, V, C> {
        let mut tree = RbTree::new("shape", cmp);
        for (key, value, black, _, _) in shape.iter().cloned() {
            let mut node = Node::new(key, value, None);
            node.black = black;
            tree.nodes.push(node);
        }
        for (i, (_, _, _, left, right)) in shape.into_iter().enumerate() {
            let (left, right) = (left.map(NodeId), right.map(NodeId));
            tree.nodes[i].left = left;
            tree.nodes[i].right = right;
            for child in left.into_iter().chain(right) {
                tree.nodes[child.0].parent = Some(NodeId(i));
            }
        }
        tree.root = if tree.nodes.is_empty() {
            None
        } else {
            Some(NodeId(0))
        };
        tree
    }

    pub(crate) fn set_color(&mut self, key: &K, black: bool) {
        if let Some(id) = self.find(key) {
            self.n_mut(id).black = black;
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    fn flip(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

fn leftmost<K, V>(nodes: &[Node<K, V>], mut id: NodeId) -> NodeId {
    while let Some(left) = nodes[id.0].left {
        id = left;
    }
    id
}

fn successor<K, V>(nodes: &[Node<K, V>], id: NodeId) -> Option<NodeId> {
    if let Some(right) = nodes[id.0].right {
        return Some(leftmost(nodes, right));
    }
    let mut child = id;
    let mut parent = nodes[id.0].parent;
    while let Some(p) = parent {
        if nodes[p.0].left == Some(child) {
            return Some(p);
        }
        child = p;
        parent = nodes[p.0].parent;
    }
    None
}

/// Iterate over entries of [`RbTree`] in sort order, walking up
/// parent links instead of keeping a stack.
pub struct Iter<'a, K, V> {
    nodes: &'a [Node<K, V>],
    next: Option<NodeId>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V>
where
    K: Clone,
    V: Clone,
{
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        self.next = successor(self.nodes, id);
        let node = &self.nodes[id.0];
        Some((node.key.clone(), node.value.clone()))
    }
}

// offset into the node arena. Only valid until the next mutation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct NodeId(usize);

/// Node corresponds to a single entry in RbTree instance.
#[derive(Clone, Debug)]
pub struct Node<K, V> {
    key: K,
    value: V,
    black: bool,              // store: black or red
    parent: Option<NodeId>,   // link: parent, not owned
    left: Option<NodeId>,     // store: left child
    right: Option<NodeId>,    // store: right child
}

// Primary operations on a single node.
impl<K, V> Node<K, V> {
    // CREATE operation, new nodes are always red.
    fn new(key: K, value: V, parent: Option<NodeId>) -> Node<K, V> {
        Node {
            key,
            value,
            black: false,
            parent,
            left: None,
            right: None,
        }
    }

    /// Return key of this entry.
    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Return value of this entry.
    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Return whether this node is colored black.
    #[inline]
    pub fn is_black(&self) -> bool {
        self.black
    }

    /// Return whether this node is colored red.
    #[inline]
    pub fn is_red(&self) -> bool {
        !self.black
    }

    #[inline]
    fn set_red(&mut self) {
        self.black = false
    }

    #[inline]
    fn set_black(&mut self) {
        self.black = true
    }
}

/// Statistics on [`RbTree`] tree. Serves two purpose:
///
/// * To get partial but quick statistics via [`RbTree::stats`] method.
/// * To get full statisics via [`RbTree::validate`] method.
#[derive(Default, Debug)]
pub struct Stats {
    entries: usize, // number of entries in the tree.
    node_size: usize,
    blacks: Option<usize>,
    depths: Option<Depth>,
}

impl Stats {
    fn new(entries: usize, node_size: usize) -> Stats {
        Stats {
            entries,
            node_size,
            blacks: Default::default(),
            depths: Default::default(),
        }
    }

    #[inline]
    fn set_blacks(&mut self, blacks: usize) {
        self.blacks = Some(blacks)
    }

    #[inline]
    fn set_depths(&mut self, depths: Depth) {
        self.depths = Some(depths)
    }

    /// Return number entries in [`RbTree`] instance.
    #[inline]
    pub fn entries(&self) -> usize {
        self.entries
    }

    /// Return node-size, including over-head for `RbTree<K, V, C>`.
    /// Node overhead is constant, node size varies based on key and
    /// value types.
    #[inline]
    pub fn node_size(&self) -> usize {
        self.node_size
    }

    /// Return number of black nodes from root to leaf, on both left
    /// and right child.
    #[inline]
    pub fn blacks(&self) -> Option<usize> {
        self.blacks
    }

    /// Return [`Depth`] statistics.
    pub fn depths(&self) -> Option<Depth> {
        match &self.depths {
            Some(depths) if depths.samples() > 0 => Some(depths.clone()),
            _ => None,
        }
    }
}
