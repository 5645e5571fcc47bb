use std::rc::Rc;

/// One step in the search tree. Nodes are immutable once created and form an
/// append-only tree through `parent` links; a parent stays alive as long as
/// any child or frontier entry references it.
#[derive(Debug)]
pub struct SearchNode<S, O> {
    pub state: S,
    pub parent: Option<Rc<SearchNode<S, O>>>,
    /// Operator applied to reach this node from `parent`. `None` only for
    /// the root.
    pub operator: Option<O>,
    /// Accumulated path cost: number of operators applied, unit cost each.
    pub g: u64,
}

impl<S, O> SearchNode<S, O> {
    pub fn root(state: S) -> Rc<Self> {
        Rc::new(Self { state, parent: None, operator: None, g: 0 })
    }

    pub fn child(parent: &Rc<Self>, operator: O, state: S) -> Rc<Self> {
        Rc::new(Self {
            state,
            parent: Some(Rc::clone(parent)),
            operator: Some(operator),
            g: parent.g + 1,
        })
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

impl<S, O: Clone> SearchNode<S, O> {
    /// Operator sequence from the root to this node, reconstructed by walking
    /// parent links and reversing. Empty for the root itself.
    pub fn extract_plan(&self) -> Vec<O> {
        let mut plan = Vec::with_capacity(self.g as usize);
        let mut current = self;
        while let Some(parent) = current.parent.as_deref() {
            if let Some(op) = &current.operator {
                plan.push(op.clone());
            }
            current = parent;
        }
        plan.reverse();
        plan
    }
}
