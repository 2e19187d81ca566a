use chain_list::other_list::{ListError, StringDList};

/// 演示程序：插入、打印、按内容查找并删除节点
fn main() -> Result<(), ListError> {
    println!("Hello, world!");

    let mut list = StringDList::new();
    list.push_front("Hello")?;
    list.push_back("World")?;
    list.push_back("!")?;
    list.print();

    // 按内容找到 "!" 节点并删除
    let target = list.find("!")?;
    list.remove(target)?;
    list.print();

    // list 在作用域结束时整体释放，所有节点只析构一次
    Ok(())
}
