use std::collections::HashMap;

use ndarray::{ArrayBase, Data, Ix1};

use super::{Dataset, Label, Labels};

impl<L: Label, S: Data<Elem = L>> Labels for ArrayBase<S, Ix1> {
    type Elem = L;

    fn label_count(&self) -> HashMap<L, usize> {
        let mut map = HashMap::new();

        for label in self.iter() {
            *map.entry(label.clone()).or_insert(0) += 1;
        }

        map
    }
}

impl<F, L: Label> Labels for Dataset<F, L> {
    type Elem = L;

    fn label_count(&self) -> HashMap<L, usize> {
        self.targets.label_count()
    }
}
