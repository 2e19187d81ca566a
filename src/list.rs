pub mod list {
    use std::collections::TryReserveError;
    use std::fmt;
    use thiserror::Error;

    // 错误定义
    #[derive(Debug, Error)]
    pub enum ListError {
        #[error("内存分配失败: {0}")]
        Allocation(#[from] TryReserveError),
        #[error("链表中没有匹配的字符串")]
        NotFound,
        #[error("节点句柄已失效或不属于当前链表")]
        StaleHandle,
    }

    /// 节点句柄，由插入和查找操作返回
    ///
    /// 句柄由槽位下标和代数组成。节点被删除后其槽位代数会增加，
    /// 此前发出的所有句柄随之失效，再传入任何操作都会得到
    /// `ListError::StaleHandle` 而不是未定义行为。
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct NodeHandle {
        index: usize,
        generation: u32,
    }

    impl NodeHandle {
        /// 返回句柄指向的槽位下标
        pub fn index(&self) -> usize {
            self.index
        }

        /// 返回句柄携带的槽位代数
        pub fn generation(&self) -> u32 {
            self.generation
        }

        pub(crate) fn from_raw_parts(index: usize, generation: u32) -> Self {
            NodeHandle { index, generation }
        }
    }

    #[derive(Debug)]
    struct Node {
        value: String,
        prev: Option<usize>,
        next: Option<usize>,
    }

    #[derive(Debug)]
    enum Entry {
        Occupied(Node),
        Free { next_free: Option<usize> },
    }

    #[derive(Debug)]
    struct Slot {
        generation: u32,
        entry: Entry,
    }

    /// 字符串双向链表
    ///
    /// 节点集中保存在一个槽位数组里，前驱和后继用槽位下标表示，
    /// 对外只暴露带代数的 [`NodeHandle`]。被删除节点的槽位挂回
    /// 空闲链表等待复用，因此长期运行不会使数组无限增长。
    ///
    /// # 不变量
    /// - `head` 为空当且仅当 `tail` 为空，当且仅当 `len == 0`
    /// - 从 `head` 沿 `next` 走 `len - 1` 步恰好到达 `tail`，反方向对称
    /// - 相邻两节点的 `next`/`prev` 互相指向对方
    pub struct StringDList {
        slots: Vec<Slot>,
        free_head: Option<usize>,
        head: Option<usize>,
        tail: Option<usize>,
        len: usize,
    }

    // 基础实现
    impl StringDList {
        /// 构造一个新的空链表，不做任何堆分配
        pub fn new() -> Self {
            StringDList {
                slots: Vec::new(),
                free_head: None,
                head: None,
                tail: None,
                len: 0,
            }
        }

        /// 获取链表当前的元素数量
        pub fn len(&self) -> usize {
            self.len
        }

        /// 判断链表是否为空
        pub fn is_empty(&self) -> bool {
            self.len == 0
        }

        fn node(&self, index: usize) -> Option<&Node> {
            match &self.slots.get(index)?.entry {
                Entry::Occupied(node) => Some(node),
                Entry::Free { .. } => None,
            }
        }

        fn node_mut(&mut self, index: usize) -> Option<&mut Node> {
            match &mut self.slots.get_mut(index)?.entry {
                Entry::Occupied(node) => Some(node),
                Entry::Free { .. } => None,
            }
        }

        fn handle_at(&self, index: usize) -> NodeHandle {
            NodeHandle {
                index,
                generation: self.slots[index].generation,
            }
        }

        /// 校验句柄：槽位必须仍被占用且代数一致
        fn slot_of(&self, handle: NodeHandle) -> Result<usize, ListError> {
            match self.slots.get(handle.index) {
                Some(slot)
                    if slot.generation == handle.generation
                        && matches!(slot.entry, Entry::Occupied(_)) =>
                {
                    Ok(handle.index)
                }
                _ => Err(ListError::StaleHandle),
            }
        }

        /// 为新节点分配槽位并写入字符串副本
        ///
        /// # 操作逻辑
        /// 1. 先以可失败方式复制字符串，失败则直接返回错误
        /// 2. 优先复用空闲链表头部的槽位，该路径不需要分配
        /// 3. 没有空闲槽位时向数组尾部追加，追加前先 `try_reserve`
        ///
        /// 所有分配都发生在修改链表结构之前，失败时链表保持原状。
        fn alloc_node(
            &mut self,
            value: &str,
            prev: Option<usize>,
            next: Option<usize>,
        ) -> Result<usize, ListError> {
            let mut copy = String::new();
            copy.try_reserve_exact(value.len())?;
            copy.push_str(value);

            if let Some(index) = self.free_head {
                if let Entry::Free { next_free } = self.slots[index].entry {
                    self.slots[index].entry = Entry::Occupied(Node {
                        value: copy,
                        prev,
                        next,
                    });
                    self.free_head = next_free;
                    return Ok(index);
                }
            }

            self.slots.try_reserve(1)?;
            self.slots.push(Slot {
                generation: 0,
                entry: Entry::Occupied(Node {
                    value: copy,
                    prev,
                    next,
                }),
            });
            Ok(self.slots.len() - 1)
        }

        /// 取出槽位中的节点并把槽位挂回空闲链表
        ///
        /// 取出的同时递增槽位代数，使所有指向该节点的旧句柄失效。
        fn take_node(&mut self, index: usize) -> Option<Node> {
            let free_head = self.free_head;
            let slot = self.slots.get_mut(index)?;
            if !matches!(slot.entry, Entry::Occupied(_)) {
                return None;
            }
            slot.generation = slot.generation.wrapping_add(1);
            let entry = std::mem::replace(&mut slot.entry, Entry::Free { next_free: free_head });
            self.free_head = Some(index);
            match entry {
                Entry::Occupied(node) => Some(node),
                Entry::Free { .. } => None,
            }
        }

        /// 在链表头部插入一个字符串
        ///
        /// # 参数
        /// - `value`: 要插入的字符串，链表保存它的一份独立副本
        ///
        /// # 返回值
        /// - `Ok(NodeHandle)`: 指向新节点的句柄
        /// - `Err(ListError::Allocation)`: 节点或字符串副本分配失败，链表未被修改
        ///
        /// # 操作逻辑
        /// 1. 分配新节点，前驱为空，后继指向当前头节点
        /// 2. 如果原头节点存在，更新其前驱指向新节点
        /// 3. 如果链表原本为空，尾指针同时指向新节点
        /// 4. 更新头指针并将长度加 1
        pub fn push_front(&mut self, value: &str) -> Result<NodeHandle, ListError> {
            let index = self.alloc_node(value, None, self.head)?;

            if let Some(old_head) = self.head {
                if let Some(node) = self.node_mut(old_head) {
                    node.prev = Some(index);
                }
            } else {
                self.tail = Some(index);
            }

            self.head = Some(index);
            self.len += 1;
            Ok(self.handle_at(index))
        }

        /// 在链表尾部插入一个字符串
        ///
        /// # 参数
        /// - `value`: 要插入的字符串，链表保存它的一份独立副本
        ///
        /// # 返回值
        /// - `Ok(NodeHandle)`: 指向新节点的句柄
        /// - `Err(ListError::Allocation)`: 节点或字符串副本分配失败，链表未被修改
        ///
        /// # 操作逻辑
        /// 1. 分配新节点，后继为空，前驱指向当前尾节点
        /// 2. 如果原尾节点存在，更新其后继指向新节点
        /// 3. 如果链表原本为空，头指针同时指向新节点
        /// 4. 更新尾指针并将长度加 1
        pub fn push_back(&mut self, value: &str) -> Result<NodeHandle, ListError> {
            let index = self.alloc_node(value, self.tail, None)?;

            if let Some(old_tail) = self.tail {
                if let Some(node) = self.node_mut(old_tail) {
                    node.next = Some(index);
                }
            } else {
                self.head = Some(index);
            }

            self.tail = Some(index);
            self.len += 1;
            Ok(self.handle_at(index))
        }

        /// 从头到尾查找第一个与 `value` 完全相等的节点
        ///
        /// # 返回值
        /// - `Ok(NodeHandle)`: 第一个匹配节点的句柄
        /// - `Err(ListError::NotFound)`: 没有匹配项，空链表也属于这种情况
        pub fn find(&self, value: &str) -> Result<NodeHandle, ListError> {
            let mut current = self.head;
            while let Some(index) = current {
                let Some(node) = self.node(index) else {
                    break;
                };
                if node.value == value {
                    return Ok(self.handle_at(index));
                }
                current = node.next;
            }
            Err(ListError::NotFound)
        }

        /// 读取句柄指向的字符串，句柄失效时返回 `None`
        pub fn get(&self, handle: NodeHandle) -> Option<&str> {
            let index = self.slot_of(handle).ok()?;
            self.node(index).map(|node| node.value.as_str())
        }

        /// 删除句柄指向的节点并返回其字符串
        ///
        /// # 参数
        /// - `handle`: 此前由插入或查找操作返回的句柄
        ///
        /// # 返回值
        /// - `Ok(String)`: 被删除节点持有的字符串
        /// - `Err(ListError::StaleHandle)`: 句柄指向的节点已被删除或槽位已被复用
        ///
        /// # 操作逻辑
        /// 1. 校验句柄代数，失败则拒绝操作
        /// 2. 取出节点并递增槽位代数
        /// 3. 前驱的后继改为被删节点的后继，前驱不存在则更新头指针
        /// 4. 后继的前驱改为被删节点的前驱，后继不存在则更新尾指针
        pub fn remove(&mut self, handle: NodeHandle) -> Result<String, ListError> {
            let index = self.slot_of(handle)?;
            let node = match self.take_node(index) {
                Some(node) => node,
                None => return Err(ListError::StaleHandle),
            };

            match node.prev {
                Some(prev) => {
                    if let Some(prev_node) = self.node_mut(prev) {
                        prev_node.next = node.next;
                    }
                }
                None => self.head = node.next,
            }

            match node.next {
                Some(next) => {
                    if let Some(next_node) = self.node_mut(next) {
                        next_node.prev = node.prev;
                    }
                }
                None => self.tail = node.prev,
            }

            self.len -= 1;
            Ok(node.value)
        }

        /// 查找并删除第一个与 `value` 相等的节点，返回其字符串
        pub fn remove_value(&mut self, value: &str) -> Result<String, ListError> {
            let handle = self.find(value)?;
            self.remove(handle)
        }

        /// 移除并返回头部的字符串，空链表返回 `None`
        pub fn pop_front(&mut self) -> Option<String> {
            let index = self.head?;
            let node = self.take_node(index)?;

            self.head = node.next;
            match self.head {
                Some(new_head) => {
                    if let Some(head_node) = self.node_mut(new_head) {
                        head_node.prev = None;
                    }
                }
                None => self.tail = None,
            }

            self.len -= 1;
            Some(node.value)
        }

        /// 移除并返回尾部的字符串，空链表返回 `None`
        pub fn pop_back(&mut self) -> Option<String> {
            let index = self.tail?;
            let node = self.take_node(index)?;

            self.tail = node.prev;
            match self.tail {
                Some(new_tail) => {
                    if let Some(tail_node) = self.node_mut(new_tail) {
                        tail_node.next = None;
                    }
                }
                None => self.head = None,
            }

            self.len -= 1;
            Some(node.value)
        }

        /// 获取头部字符串的引用
        pub fn front(&self) -> Option<&str> {
            self.node(self.head?).map(|node| node.value.as_str())
        }

        /// 获取尾部字符串的引用
        pub fn back(&self) -> Option<&str> {
            self.node(self.tail?).map(|node| node.value.as_str())
        }

        /// 删除所有节点，保留已分配的槽位数组
        pub fn clear(&mut self) {
            while self.pop_front().is_some() {}
        }

        /// 按从头到尾的顺序打印链表内容，带一行分隔横幅
        pub fn print(&self) {
            println!("=====================");
            for value in self.iter() {
                println!("{value}");
            }
        }
    }

    // 迭代器实现
    impl StringDList {
        /// 创建一个从头到尾遍历链表的迭代器
        pub fn iter(&self) -> Iter<'_> {
            Iter {
                list: self,
                current: self.head,
            }
        }

        /// 创建一个消费型迭代器，按头到尾的顺序取出所有字符串
        pub fn into_iter(self) -> IntoIter {
            IntoIter { list: self }
        }
    }

    /// 前向不可变迭代器
    pub struct Iter<'a> {
        list: &'a StringDList,
        current: Option<usize>,
    }

    impl<'a> Iterator for Iter<'a> {
        type Item = &'a str;

        fn next(&mut self) -> Option<Self::Item> {
            let index = self.current?;
            let node = self.list.node(index)?;
            self.current = node.next;
            Some(node.value.as_str())
        }
    }

    /// 消费迭代器
    pub struct IntoIter {
        list: StringDList,
    }

    impl Iterator for IntoIter {
        type Item = String;

        fn next(&mut self) -> Option<Self::Item> {
            self.list.pop_front()
        }
    }

    impl IntoIterator for StringDList {
        type Item = String;
        type IntoIter = IntoIter;

        fn into_iter(self) -> Self::IntoIter {
            IntoIter { list: self }
        }
    }

    impl<'a> IntoIterator for &'a StringDList {
        type Item = &'a str;
        type IntoIter = Iter<'a>;

        fn into_iter(self) -> Self::IntoIter {
            self.iter()
        }
    }

    // 从迭代器创建链表
    impl<S: AsRef<str>> FromIterator<S> for StringDList {
        /// 依次把迭代器元素追加到尾部构成链表
        ///
        /// 分配失败的元素会被丢弃，需要逐项处理错误时请直接使用
        /// [`StringDList::push_back`]。
        fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
            let mut list = StringDList::new();
            for item in iter {
                let _ = list.push_back(item.as_ref());
            }
            list
        }
    }

    impl<S: AsRef<str>> Extend<S> for StringDList {
        fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
            for item in iter {
                let _ = self.push_back(item.as_ref());
            }
        }
    }

    // 格式化输出
    impl fmt::Debug for StringDList {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.debug_list().entries(self.iter()).finish()
        }
    }

    // 克隆实现
    impl Clone for StringDList {
        fn clone(&self) -> Self {
            self.iter().collect()
        }
    }

    impl PartialEq for StringDList {
        fn eq(&self, other: &Self) -> bool {
            self.len == other.len && self.iter().eq(other.iter())
        }
    }

    impl Eq for StringDList {}

    // 默认实现
    impl Default for StringDList {
        fn default() -> Self {
            Self::new()
        }
    }

    #[cfg(test)]
    impl StringDList {
        /// 全量校验链表结构不变量，仅用于测试
        fn assert_links(&self) {
            let mut count = 0;
            let mut prev = None;
            let mut current = self.head;
            while let Some(index) = current {
                let node = self.node(index).expect("链表指向了空闲槽位");
                assert_eq!(node.prev, prev);
                prev = current;
                current = node.next;
                count += 1;
            }
            assert_eq!(self.tail, prev);
            assert_eq!(self.len, count);
            assert_eq!(self.head.is_none(), self.tail.is_none());
            assert_eq!(self.len == 0, self.head.is_none());
        }
    }

}

pub mod c_list {
    use crate::other_list::{ListError, NodeHandle, StringDList};
    use std::ffi::{CStr, CString, c_char, c_int};
    use std::ptr;

    // 不透明指针类型，对C完全隐藏实现细节
    #[repr(C)]
    pub struct CStringDList {
        inner: StringDList,
    }

    /// C端持有的节点句柄，按值传递
    #[repr(C)]
    #[derive(Debug, Clone, Copy)]
    pub struct CNodeHandle {
        pub index: usize,
        pub generation: u32,
    }

    impl From<NodeHandle> for CNodeHandle {
        fn from(handle: NodeHandle) -> Self {
            CNodeHandle {
                index: handle.index(),
                generation: handle.generation(),
            }
        }
    }

    impl From<CNodeHandle> for NodeHandle {
        fn from(handle: CNodeHandle) -> Self {
            NodeHandle::from_raw_parts(handle.index, handle.generation)
        }
    }

    // 错误码定义
    pub const SDL_SUCCESS: c_int = 0;
    pub const SDL_ERROR_NULL_PTR: c_int = -1;
    pub const SDL_ERROR_ALLOC: c_int = -2;
    pub const SDL_ERROR_NOT_FOUND: c_int = -3;
    pub const SDL_ERROR_STALE_HANDLE: c_int = -4;
    pub const SDL_ERROR_INVALID_UTF8: c_int = -5;

    fn error_code(err: &ListError) -> c_int {
        match err {
            ListError::Allocation(_) => SDL_ERROR_ALLOC,
            ListError::NotFound => SDL_ERROR_NOT_FOUND,
            ListError::StaleHandle => SDL_ERROR_STALE_HANDLE,
        }
    }

    /// 把字符串所有权交给C端，内容带内部空字符时返回空指针
    fn string_to_c(value: String) -> *mut c_char {
        match CString::new(value) {
            Ok(s) => s.into_raw(),
            Err(_) => ptr::null_mut(),
        }
    }

    /// 创建一个新的C语言接口可用的字符串双向链表实例
    ///
    /// 返回值:
    /// - 指向 `CStringDList` 实例的裸指针，使用完毕后必须交给 [`sdl_free`] 释放。
    #[unsafe(no_mangle)]
    pub extern "C" fn sdl_new() -> *mut CStringDList {
        Box::into_raw(Box::new(CStringDList {
            inner: StringDList::new(),
        }))
    }

    /// 释放由[sdl_new]创建的链表实例及其全部节点
    ///
    /// 参数:
    /// - `list`: 指向 `CStringDList` 实例的裸指针，为空时不执行任何操作。
    ///
    /// 注意:
    /// - 释放后指针不得再次使用，重复调用同一指针是未定义行为。
    #[unsafe(no_mangle)]
    pub extern "C" fn sdl_free(list: *mut CStringDList) {
        if !list.is_null() {
            unsafe {
                let _ = Box::from_raw(list);
            }
        }
    }

    /// 获取链表当前的元素数量，空指针返回0
    #[unsafe(no_mangle)]
    pub extern "C" fn sdl_len(list: *const CStringDList) -> usize {
        if list.is_null() {
            0
        } else {
            unsafe { (*list).inner.len() }
        }
    }

    /// 检查链表是否为空
    ///
    /// 返回值:
    /// - 空指针返回 `SDL_ERROR_NULL_PTR`，否则返回1（空）或0（非空）。
    #[unsafe(no_mangle)]
    pub extern "C" fn sdl_is_empty(list: *const CStringDList) -> c_int {
        if list.is_null() {
            SDL_ERROR_NULL_PTR
        } else {
            unsafe { (*list).inner.is_empty() as c_int }
        }
    }

    /// 在链表头部插入一个字符串
    ///
    /// 参数:
    /// - `list`: 指向 `CStringDList` 实例的可变裸指针。
    /// - `value`: 以空字符结尾的UTF-8字符串，链表保存其副本。
    /// - `out_handle`: 可选的输出参数，非空时写入新节点的句柄。
    ///
    /// 返回值:
    /// - `SDL_SUCCESS` 表示成功；指针为空、编码非法或分配失败时返回对应错误码，
    ///   失败时链表保持原状。
    #[unsafe(no_mangle)]
    pub extern "C" fn sdl_push_front(
        list: *mut CStringDList,
        value: *const c_char,
        out_handle: *mut CNodeHandle,
    ) -> c_int {
        if list.is_null() || value.is_null() {
            return SDL_ERROR_NULL_PTR;
        }
        let value = match unsafe { CStr::from_ptr(value) }.to_str() {
            Ok(s) => s,
            Err(_) => return SDL_ERROR_INVALID_UTF8,
        };
        match unsafe { &mut (*list).inner }.push_front(value) {
            Ok(handle) => {
                if !out_handle.is_null() {
                    unsafe {
                        *out_handle = handle.into();
                    }
                }
                SDL_SUCCESS
            }
            Err(err) => error_code(&err),
        }
    }

    /// 在链表尾部插入一个字符串，参数与返回值约定同[sdl_push_front]
    #[unsafe(no_mangle)]
    pub extern "C" fn sdl_push_back(
        list: *mut CStringDList,
        value: *const c_char,
        out_handle: *mut CNodeHandle,
    ) -> c_int {
        if list.is_null() || value.is_null() {
            return SDL_ERROR_NULL_PTR;
        }
        let value = match unsafe { CStr::from_ptr(value) }.to_str() {
            Ok(s) => s,
            Err(_) => return SDL_ERROR_INVALID_UTF8,
        };
        match unsafe { &mut (*list).inner }.push_back(value) {
            Ok(handle) => {
                if !out_handle.is_null() {
                    unsafe {
                        *out_handle = handle.into();
                    }
                }
                SDL_SUCCESS
            }
            Err(err) => error_code(&err),
        }
    }

    /// 从头到尾查找第一个与 `value` 完全相等的节点
    ///
    /// 参数:
    /// - `list`: 指向 `CStringDList` 实例的常量裸指针。
    /// - `value`: 以空字符结尾的UTF-8字符串。
    /// - `out_handle`: 可选的输出参数，命中时写入匹配节点的句柄。
    ///
    /// 返回值:
    /// - `SDL_SUCCESS` 表示命中，`SDL_ERROR_NOT_FOUND` 表示没有匹配项。
    #[unsafe(no_mangle)]
    pub extern "C" fn sdl_find(
        list: *const CStringDList,
        value: *const c_char,
        out_handle: *mut CNodeHandle,
    ) -> c_int {
        if list.is_null() || value.is_null() {
            return SDL_ERROR_NULL_PTR;
        }
        let value = match unsafe { CStr::from_ptr(value) }.to_str() {
            Ok(s) => s,
            Err(_) => return SDL_ERROR_INVALID_UTF8,
        };
        match unsafe { &(*list).inner }.find(value) {
            Ok(handle) => {
                if !out_handle.is_null() {
                    unsafe {
                        *out_handle = handle.into();
                    }
                }
                SDL_SUCCESS
            }
            Err(err) => error_code(&err),
        }
    }

    /// 删除句柄指向的节点
    ///
    /// 参数:
    /// - `list`: 指向 `CStringDList` 实例的可变裸指针。
    /// - `handle`: 此前由插入或查找得到的句柄。
    /// - `out_value`: 可选的输出参数，非空时写入被删节点的字符串，
    ///   该字符串必须交给 [`sdl_string_free`] 释放。
    ///
    /// 返回值:
    /// - `SDL_SUCCESS` 表示成功；句柄失效时返回 `SDL_ERROR_STALE_HANDLE`，
    ///   不会发生重复释放。
    #[unsafe(no_mangle)]
    pub extern "C" fn sdl_remove(
        list: *mut CStringDList,
        handle: CNodeHandle,
        out_value: *mut *mut c_char,
    ) -> c_int {
        if list.is_null() {
            return SDL_ERROR_NULL_PTR;
        }
        match unsafe { &mut (*list).inner }.remove(handle.into()) {
            Ok(value) => {
                if !out_value.is_null() {
                    unsafe {
                        *out_value = string_to_c(value);
                    }
                }
                SDL_SUCCESS
            }
            Err(err) => error_code(&err),
        }
    }

    /// 读取句柄指向的字符串副本
    ///
    /// 返回值:
    /// - 指向新分配C字符串的裸指针，必须交给 [`sdl_string_free`] 释放；
    /// - 指针为空或句柄失效时返回空指针。
    #[unsafe(no_mangle)]
    pub extern "C" fn sdl_get(list: *const CStringDList, handle: CNodeHandle) -> *mut c_char {
        if list.is_null() {
            return ptr::null_mut();
        }
        match unsafe { &(*list).inner }.get(handle.into()) {
            Some(value) => string_to_c(value.to_owned()),
            None => ptr::null_mut(),
        }
    }

    /// 按从头到尾的顺序打印链表内容，空指针不执行任何操作
    #[unsafe(no_mangle)]
    pub extern "C" fn sdl_print(list: *const CStringDList) {
        if !list.is_null() {
            unsafe { &(*list).inner }.print();
        }
    }

    /// 删除链表中的所有节点，链表本身保持可用
    #[unsafe(no_mangle)]
    pub extern "C" fn sdl_clear(list: *mut CStringDList) -> c_int {
        if list.is_null() {
            return SDL_ERROR_NULL_PTR;
        }
        unsafe { &mut (*list).inner }.clear();
        SDL_SUCCESS
    }

    /// 释放由[sdl_get]或[sdl_remove]交出的字符串
    #[unsafe(no_mangle)]
    pub extern "C" fn sdl_string_free(value: *mut c_char) {
        if !value.is_null() {
            unsafe {
                let _ = CString::from_raw(value);
            }
        }
    }

    // 测试代码
    #[cfg(test)]
    mod tests {
        use super::*;

        // C接口完整流程测试
        #[test]
        fn test_c_surface_roundtrip() {
            let list = sdl_new();
            assert!(!list.is_null());
            assert_eq!(sdl_len(list), 0);
            assert_eq!(sdl_is_empty(list), 1);

            let hello = CString::new("Hello").unwrap();
            let world = CString::new("World").unwrap();
            let bang = CString::new("!").unwrap();

            let mut handle = CNodeHandle {
                index: 0,
                generation: 0,
            };
            assert_eq!(
                sdl_push_front(list, hello.as_ptr(), &mut handle),
                SDL_SUCCESS
            );
            assert_eq!(
                sdl_push_back(list, world.as_ptr(), ptr::null_mut()),
                SDL_SUCCESS
            );
            assert_eq!(
                sdl_push_back(list, bang.as_ptr(), ptr::null_mut()),
                SDL_SUCCESS
            );
            assert_eq!(sdl_len(list), 3);
            assert_eq!(sdl_is_empty(list), 0);

            let head_value = sdl_get(list, handle);
            assert!(!head_value.is_null());
            assert_eq!(
                unsafe { CStr::from_ptr(head_value) }.to_str().unwrap(),
                "Hello"
            );
            sdl_string_free(head_value);

            let mut found = CNodeHandle {
                index: 0,
                generation: 0,
            };
            assert_eq!(sdl_find(list, bang.as_ptr(), &mut found), SDL_SUCCESS);

            let mut removed: *mut c_char = ptr::null_mut();
            assert_eq!(sdl_remove(list, found, &mut removed), SDL_SUCCESS);
            assert!(!removed.is_null());
            assert_eq!(unsafe { CStr::from_ptr(removed) }.to_str().unwrap(), "!");
            sdl_string_free(removed);

            // 旧句柄再次删除必须被拒绝
            assert_eq!(
                sdl_remove(list, found, ptr::null_mut()),
                SDL_ERROR_STALE_HANDLE
            );
            assert_eq!(sdl_len(list), 2);

            assert_eq!(
                sdl_find(list, bang.as_ptr(), ptr::null_mut()),
                SDL_ERROR_NOT_FOUND
            );

            assert_eq!(sdl_clear(list), SDL_SUCCESS);
            assert_eq!(sdl_len(list), 0);

            sdl_free(list);
        }

        // 空指针防护测试
        #[test]
        fn test_null_pointer_guards() {
            let value = CString::new("x").unwrap();
            assert_eq!(
                sdl_push_front(ptr::null_mut(), value.as_ptr(), ptr::null_mut()),
                SDL_ERROR_NULL_PTR
            );
            assert_eq!(
                sdl_find(ptr::null(), value.as_ptr(), ptr::null_mut()),
                SDL_ERROR_NULL_PTR
            );
            assert_eq!(sdl_len(ptr::null()), 0);
            assert_eq!(sdl_is_empty(ptr::null()), SDL_ERROR_NULL_PTR);
            sdl_print(ptr::null());
            sdl_free(ptr::null_mut());
            sdl_string_free(ptr::null_mut());

            let list = sdl_new();
            assert_eq!(
                sdl_push_back(list, ptr::null(), ptr::null_mut()),
                SDL_ERROR_NULL_PTR
            );
            sdl_free(list);
        }
    }
}
